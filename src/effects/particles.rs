use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;
use yew::prelude::*;
use yew_hooks::prelude::*;

// Page-level shim around tsParticles, defined in index.html.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = heroParticles, js_name = load)]
    fn load_particles(id: &str, options: JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = heroParticles, js_name = destroy)]
    fn destroy_particles(id: &str) -> Result<(), JsValue>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    pub value: String,
}

impl ColorValue {
    fn of(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Background {
    pub color: ColorValue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeToggle {
    pub enable: bool,
    pub mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractivityEvents {
    pub on_click: ModeToggle,
    pub on_hover: ModeToggle,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PushMode {
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepulseMode {
    pub distance: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractivityModes {
    pub push: PushMode,
    pub repulse: RepulseMode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interactivity {
    pub events: InteractivityEvents,
    pub modes: InteractivityModes,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Links {
    pub color: String,
    pub distance: f64,
    pub enable: bool,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutModes {
    pub default: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub direction: String,
    pub enable: bool,
    pub out_modes: OutModes,
    pub random: bool,
    pub speed: f64,
    pub straight: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub area: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleCount {
    pub density: Density,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Opacity {
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeKind {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Size {
    pub value: MinMax,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleStyle {
    pub color: ColorValue,
    pub links: Links,
    #[serde(rename = "move")]
    pub movement: Movement,
    pub number: ParticleCount,
    pub opacity: Opacity,
    pub shape: ShapeKind,
    pub size: Size,
}

/// Declarative options handed to the particle engine untouched.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticlesOptions {
    pub background: Background,
    pub fps_limit: u32,
    pub interactivity: Interactivity,
    pub particles: ParticleStyle,
    pub detect_retina: bool,
}

impl Default for ParticlesOptions {
    fn default() -> Self {
        const PRIMARY: &str = "hsl(var(--primary))";
        Self {
            background: Background {
                color: ColorValue::of("transparent"),
            },
            fps_limit: 120,
            interactivity: Interactivity {
                events: InteractivityEvents {
                    on_click: ModeToggle {
                        enable: true,
                        mode: "push".to_string(),
                    },
                    on_hover: ModeToggle {
                        enable: true,
                        mode: "repulse".to_string(),
                    },
                    resize: true,
                },
                modes: InteractivityModes {
                    push: PushMode { quantity: 4 },
                    repulse: RepulseMode {
                        distance: 200.0,
                        duration: 0.4,
                    },
                },
            },
            particles: ParticleStyle {
                color: ColorValue::of(PRIMARY),
                links: Links {
                    color: PRIMARY.to_string(),
                    distance: 150.0,
                    enable: true,
                    opacity: 0.1,
                    width: 1.0,
                },
                movement: Movement {
                    direction: "none".to_string(),
                    enable: true,
                    out_modes: OutModes {
                        default: "bounce".to_string(),
                    },
                    random: false,
                    speed: 1.0,
                    straight: false,
                },
                number: ParticleCount {
                    density: Density {
                        enable: true,
                        area: 800.0,
                    },
                    value: 80,
                },
                opacity: Opacity { value: 0.2 },
                shape: ShapeKind {
                    kind: "circle".to_string(),
                },
                size: Size {
                    value: MinMax { min: 1.0, max: 3.0 },
                },
            },
            detect_retina: true,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub options: ParticlesOptions,
    #[prop_or_default]
    pub class: Classes,
}

/// Shared flag telling a pending load whether its mount point is still there.
#[derive(Clone, Debug)]
struct Mounted(Rc<Cell<bool>>);

impl Mounted {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn is_mounted(&self) -> bool {
        self.0.get()
    }

    fn unmount(&self) {
        self.0.set(false);
    }
}

fn destroy(id: &str) {
    if let Err(e) = destroy_particles(id) {
        gloo_console::warn!("Failed to destroy particle container", e);
    }
}

async fn start_engine(id: AttrValue, options: ParticlesOptions, mounted: Mounted) {
    let options = match options.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(options) => options,
        Err(e) => {
            gloo_console::error!(format!("Failed to encode particle options: {}", e));
            return;
        }
    };

    match load_particles(&id, options) {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) if !mounted.is_mounted() => {
                log::debug!("Particles for #{} loaded after unmount, destroying", id);
                destroy(&id);
            }
            Ok(container) => {
                log::info!("Particles loaded into #{}", id);
                gloo_console::debug!("Particle container", container);
            }
            Err(e) => gloo_console::error!("Particle engine failed to start", e),
        },
        Err(e) => gloo_console::warn!("Particle engine unavailable, background stays empty", e),
    }
}

/// Mount point for the particle engine; the container is destroyed on unmount.
#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let mounted = use_mut_ref(Mounted::new).borrow().clone();

    {
        let id = props.id.clone();
        let options = props.options.clone();
        let mounted = mounted.clone();
        use_mount(move || {
            wasm_bindgen_futures::spawn_local(start_engine(id, options, mounted));
        });
    }
    {
        let id = props.id.clone();
        use_unmount(move || {
            mounted.unmount();
            destroy(&id);
        });
    }

    html! {
        <div id={props.id.clone()} class={classes!("particles", props.class.clone())}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_serialize_with_engine_field_names() {
        let value = serde_json::to_value(ParticlesOptions::default()).unwrap();
        assert_eq!(value["fpsLimit"], json!(120));
        assert_eq!(value["detectRetina"], json!(true));
        assert_eq!(value["background"]["color"]["value"], json!("transparent"));
        assert_eq!(value["interactivity"]["events"]["onClick"]["mode"], json!("push"));
        assert_eq!(value["interactivity"]["events"]["onHover"]["mode"], json!("repulse"));
        assert_eq!(value["interactivity"]["modes"]["push"]["quantity"], json!(4));
        assert_eq!(value["particles"]["move"]["outModes"]["default"], json!("bounce"));
        assert_eq!(value["particles"]["shape"]["type"], json!("circle"));
        assert_eq!(value["particles"]["size"]["value"], json!({ "min": 1.0, "max": 3.0 }));
    }

    #[test]
    fn unmount_is_seen_by_every_pending_load() {
        let mounted = Mounted::new();
        let pending = mounted.clone();
        assert!(pending.is_mounted());
        mounted.unmount();
        assert!(!pending.is_mounted());
    }

    #[test]
    fn defaults_match_the_hero_field() {
        let options = ParticlesOptions::default();
        assert_eq!(options.particles.number.value, 80);
        assert_eq!(options.particles.number.density.area, 800.0);
        assert_eq!(options.particles.links.distance, 150.0);
        assert_eq!(options.interactivity.modes.repulse.distance, 200.0);
        assert_eq!(options.particles.opacity.value, 0.2);
    }
}
