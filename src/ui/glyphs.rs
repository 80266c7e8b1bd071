/// Decorative characters used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub title_icon: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        title_icon: "*",
        arrow_up: "^",
        arrow_down: "v",
        separator: "|",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        title_icon: "🧬",
        arrow_up: "↑",
        arrow_down: "↓",
        separator: "|",
    }
}
