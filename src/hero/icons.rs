use yew::prelude::*;

/// Glyphs the hero can draw. Stroke paths follow the 24x24 outline icon grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Shield,
    Globe,
    Code,
    Rocket,
    Users,
    Sparkles,
    ArrowRight,
}

enum Shape {
    Path(&'static str),
    Circle { cx: u8, cy: u8, r: u8 },
    Line { x1: u8, y1: u8, x2: u8, y2: u8 },
    Polyline(&'static str),
    Polygon(&'static str),
}

impl Icon {
    /// Glyph used whenever a feature names an icon we do not know.
    pub const FALLBACK: Icon = Icon::Sparkles;

    /// Maps a symbolic name to a glyph. Never fails.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "zap" => Icon::Zap,
            "shield" => Icon::Shield,
            "globe" => Icon::Globe,
            "code" => Icon::Code,
            "rocket" => Icon::Rocket,
            "users" => Icon::Users,
            _ => Icon::FALLBACK,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Zap => "zap",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::Code => "code",
            Icon::Rocket => "rocket",
            Icon::Users => "users",
            Icon::Sparkles => "sparkles",
            Icon::ArrowRight => "arrow-right",
        }
    }

    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::Zap => &[Shape::Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
            Icon::Shield => &[Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
            Icon::Globe => &[
                Shape::Circle { cx: 12, cy: 12, r: 10 },
                Shape::Line { x1: 2, y1: 12, x2: 22, y2: 12 },
                Shape::Path("M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
            ],
            Icon::Code => &[
                Shape::Polyline("16 18 22 12 16 6"),
                Shape::Polyline("8 6 2 12 8 18"),
            ],
            Icon::Rocket => &[
                Shape::Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"),
                Shape::Path("m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"),
                Shape::Path("M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"),
                Shape::Path("M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
            ],
            Icon::Users => &[
                Shape::Path("M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 9, cy: 7, r: 4 },
                Shape::Path("M23 21v-2a4 4 0 0 0-3-3.87"),
                Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Sparkles => &[
                Shape::Path("M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z"),
                Shape::Path("M19 3v4"),
                Shape::Path("M21 5h-4"),
            ],
            Icon::ArrowRight => &[
                Shape::Line { x1: 5, y1: 12, x2: 19, y2: 12 },
                Shape::Polyline("12 5 19 12 12 19"),
            ],
        }
    }

    pub fn render(&self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", format!("icon-{}", self.name()), class)}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.shapes().iter().map(render_shape) }
            </svg>
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match shape {
        Shape::Path(d) => html! { <path d={*d} /> },
        Shape::Circle { cx, cy, r } => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Line { x1, y1, x2, y2 } => html! {
            <line x1={x1.to_string()} y1={y1.to_string()} x2={x2.to_string()} y2={y2.to_string()} />
        },
        Shape::Polyline(points) => html! { <polyline points={*points} /> },
        Shape::Polygon(points) => html! { <polygon points={*points} /> },
    }
}
