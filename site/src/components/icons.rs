//! Inline SVG icons.
//!
//! Paths are drawn on a 256x256 grid, the same box the Phosphor set uses.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_PLAY size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Play triangle
pub const ICON_PLAY: &str = "M72,32V224L224,128Z";

/// Pause bars
pub const ICON_PAUSE: &str = "M64,40h48V216H64Zm80,0h48V216H144Z";

/// Chevron pointing right
pub const ICON_CARET_RIGHT: &str = "M96,40l-16,16,72,72-72,72,16,16,88-88Z";

/// Hamburger menu
pub const ICON_LIST: &str = "M32,56H224V80H32Zm0,60H224v24H32Zm0,60H224v24H32Z";

/// Rounded square with lens (Instagram)
pub const ICON_INSTAGRAM: &str = "M176,24H80A56,56,0,0,0,24,80v96a56,56,0,0,0,56,56h96a56,56,0,0,0,56-56V80A56,56,0,0,0,176,24Zm40,152a40,40,0,0,1-40,40H80a40,40,0,0,1-40-40V80A40,40,0,0,1,80,40h96a40,40,0,0,1,40,40ZM128,84a44,44,0,1,0,44,44A44,44,0,0,0,128,84Zm0,72a28,28,0,1,1,28-28A28,28,0,0,1,128,156ZM188,68a12,12,0,1,1-12,12A12,12,0,0,1,188,68Z";

/// "in" tile (LinkedIn)
pub const ICON_LINKEDIN: &str = "M216,24H40A16,16,0,0,0,24,40V216a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V40A16,16,0,0,0,216,24ZM96,176H72V112H96ZM84,100a14,14,0,1,1,14-14A14,14,0,0,1,84,100Zm100,76H160V140c0-10-6-16-14-16s-14,6-14,16v36H108V112h24v8c6-8,14-12,24-12,16,0,28,12,28,32Z";

/// Play button tile (YouTube)
pub const ICON_YOUTUBE: &str = "M232,72a24,24,0,0,0-17-17C198,48,128,48,128,48s-70,0-87,7A24,24,0,0,0,24,72c-8,32-8,112,0,112a24,24,0,0,0,17,17c17,7,87,7,87,7s70,0,87-7a24,24,0,0,0,17-17C240,152,240,104,232,72ZM108,160V96l56,32Z";

/// Icon for a social network label, if one is drawn.
pub fn social_icon(label: &str) -> Option<&'static str> {
    match label {
        "Instagram" => Some(ICON_INSTAGRAM),
        "LinkedIn" => Some(ICON_LINKEDIN),
        "YouTube" => Some(ICON_YOUTUBE),
        _ => None,
    }
}
