// Inline SVG icons (Lucide outlines).
use maud::{html, Markup};

fn icon(size: u32, paths: Markup) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width=(size)
            height=(size)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        {
            (paths)
        }
    }
}

pub fn paint_bucket() -> Markup {
    icon(
        24,
        html! {
            path d="m19 11-8-8-8.6 8.6a2 2 0 0 0 0 2.8l5.2 5.2c.8.8 2 .8 2.8 0L19 11Z" {}
            path d="m5 2 5 5" {}
            path d="M2 13h15" {}
            path d="M22 20a2 2 0 1 1-4 0c0-1.6 1.7-2.4 2-4 .3 1.6 2 2.4 2 4Z" {}
        },
    )
}

pub fn logout() -> Markup {
    icon(
        18,
        html! {
            path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" {}
            polyline points="16 17 21 12 16 7" {}
            line x1="21" x2="9" y1="12" y2="12" {}
        },
    )
}

pub fn alert() -> Markup {
    icon(
        16,
        html! {
            path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" {}
            path d="M12 9v4" {}
            path d="M12 17h.01" {}
        },
    )
}

pub fn check_square() -> Markup {
    icon(
        20,
        html! {
            polyline points="9 11 12 14 22 4" {}
            path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11" {}
        },
    )
}
