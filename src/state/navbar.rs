// Navbar presentation derived from the window scroll offset

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarStyle {
    /// `bg-white/95` instead of `border-transparent`
    pub opaque: bool,
    /// `shadow-md`
    pub shadow: bool,
}

impl NavbarStyle {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut c = Vec::with_capacity(2);
        c.push(if self.opaque { "bg-white/95" } else { "border-transparent" });
        if self.shadow {
            c.push("shadow-md");
        }
        c
    }
}

/// Navbar presentation for a given vertical scroll offset.
///
/// Above `threshold` the bar is opaque with a shadow. At or below it the
/// shadow always goes; the background only stays opaque when `sticky` is set
/// and it was already opaque.
pub fn navbar_style(scroll_y: f64, threshold: f64, sticky: bool, prev: NavbarStyle) -> NavbarStyle {
    if scroll_y > threshold {
        NavbarStyle {
            opaque: true,
            shadow: true,
        }
    } else {
        NavbarStyle {
            opaque: sticky && prev.opaque,
            shadow: false,
        }
    }
}
