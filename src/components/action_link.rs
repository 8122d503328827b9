use leptos::prelude::*;

/// The purchase row appended under a caption when an item has a link.
#[component]
pub fn ActionLinkRow(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(into)] row_class: String,
    #[prop(into)] link_class: String,
) -> impl IntoView {
    view! {
        <div class=row_class>
            <a class=link_class href=href target="_blank" rel="noopener noreferrer">
                <BasketIcon/>
                <span>{label}</span>
            </a>
        </div>
    }
}

#[component]
fn BasketIcon() -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 48 48"
            width="20"
            height="20"
            fill="none"
            stroke="currentColor"
            stroke-width="2.4"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M41.38,19.84H33.52l-7.77-13a2,2,0,0,0-3.5,0l-7.77,13H6.62a3.12,3.12,0,0,0-3,3.93L8,40.08a2.84,2.84,0,0,0,2.74,2.1H37.24A2.84,2.84,0,0,0,40,40.08l4.41-16.31A3.12,3.12,0,0,0,41.38,19.84ZM24,11.84l4.77,8H19.23Z"/>
            <line x1="14.48" y1="19.84" x2="33.52" y2="19.84"/>
            <path d="M31,29.17c.94-.47,2.61-1.1,3.11-.34s-.14,2.58-.78,4"/>
            <path d="M13.69,29.71c1.49,1.46,5.88,3.69,10.55,3.69a12.63,12.63,0,0,0,8.59-3.21"/>
        </svg>
    }
}
