use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    title: AttrValue,
    message: AttrValue,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder-page" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1>{ props.title.clone() }</h1>
            <p>{ props.message.clone() }</p>
            <Link<Route> to={Route::Home} classes="placeholder-home-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}

#[function_component(Signup)]
pub fn signup() -> Html {
    html! {
        <Placeholder title="Start your free trial" message="Sign up is opening soon." />
    }
}

#[function_component(Demo)]
pub fn demo() -> Html {
    html! {
        <Placeholder title="Watch the demo" message="The product tour is on its way." />
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Placeholder title="404" message="This page doesn't exist." />
    }
}
