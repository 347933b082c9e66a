use folio_core::NavSection;
use yew::prelude::*;

use crate::app_router;
use crate::dom;
use crate::gallery::ProjectGallery;
use crate::navbar::Navbar;

#[derive(Properties, PartialEq)]
struct SectionProps {
    section: NavSection,
    #[prop_or_default]
    children: Html,
}

#[function_component(PageSection)]
fn page_section(props: &SectionProps) -> Html {
    html! {
        <section id={props.section.id()} class={classes!("page-section", props.section.id())}>
            <h2 class="section-title">{ props.section.label() }</h2>
            { props.children.clone() }
        </section>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    use_effect_with((), |_| {
        if let Some(section) = app_router::initial_section() {
            dom::scroll_to_section(section);
        }
        || ()
    });

    html! {
        <>
            <Navbar />
            <main>
                <section id={NavSection::Home.id()} class="hero">
                    <h1>{ "Designing products people enjoy using" }</h1>
                    <p>{ "UI/UX designer focused on mobile apps, dashboards and brand systems." }</p>
                </section>
                <PageSection section={NavSection::About}>
                    <p>{ "I turn research into clear flows, crisp interfaces and design systems that scale." }</p>
                </PageSection>
                <PageSection section={NavSection::Skills}>
                    <p>{ "User research, wireframing, prototyping, visual design and usability testing." }</p>
                </PageSection>
                <ProjectGallery />
                <PageSection section={NavSection::Contact}>
                    <p>{ "Have a project in mind? Let's talk." }</p>
                </PageSection>
            </main>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_app() -> (web_sys::Element, yew::AppHandle<App>) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        (root, handle)
    }

    fn unmount_app(root: web_sys::Element, handle: yew::AppHandle<App>) {
        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn renders_every_navigable_section() {
        set_panic_hook();
        let (root, app_handle) = mount_app();
        TimeoutFuture::new(20).await;
        for section in NavSection::ALL {
            let selector = format!("#{}", section.id());
            assert!(
                root.query_selector(&selector).ok().flatten().is_some(),
                "missing section {selector}"
            );
        }
        let links = root
            .query_selector_all(".nav-links li")
            .expect("query nav links");
        assert_eq!(links.length(), 4);
        unmount_app(root, app_handle);
    }

    #[wasm_bindgen_test(async)]
    async fn first_page_hides_prev_control() {
        set_panic_hook();
        let (root, app_handle) = mount_app();
        TimeoutFuture::new(20).await;
        assert!(root.query_selector(".carousel-nav.prev").ok().flatten().is_none());
        let dots = root.query_selector_all(".dots .dot").expect("query dots");
        assert!(dots.length() >= 1);
        assert!(root.query_selector(".dots .dot.active").ok().flatten().is_some());
        unmount_app(root, app_handle);
    }
}
