use std::rc::Rc;

use folio_core::{NavSection, NavbarState, MENU_SECTIONS};
use gloo::events::EventListener;
use yew::prelude::*;

use crate::app_router;
use crate::dom;

#[derive(Clone, Copy, Default, PartialEq)]
struct NavbarModel(NavbarState);

enum NavbarAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavbarModel {
    type Action = NavbarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            NavbarAction::Scrolled(offset) => next.on_scroll(offset),
            NavbarAction::ToggleMenu => next.toggle_menu(),
            NavbarAction::CloseMenu => next.close_menu(),
        }
        if next == self.0 {
            self
        } else {
            Rc::new(NavbarModel(next))
        }
    }
}

#[derive(Properties, PartialEq)]
struct SectionLinkProps {
    section: NavSection,
    class: Classes,
    onnavigate: Callback<NavSection>,
}

#[function_component(SectionLink)]
fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let section = props.section;
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |_: MouseEvent| onnavigate.emit(section))
    };
    html! {
        <li class={props.class.clone()}>
            <button type="button" {onclick}>{ props.section.label() }</button>
            <span class="nav-underline"></span>
        </li>
    }
}

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let model = use_reducer(NavbarModel::default);
    {
        let model = model.dispatcher();
        use_effect_with((), move |_| {
            model.dispatch(NavbarAction::Scrolled(dom::scroll_offset()));
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_event| {
                    model.dispatch(NavbarAction::Scrolled(dom::scroll_offset()));
                })
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let model = model.dispatcher();
        Callback::from(move |section: NavSection| {
            dom::scroll_to_section(section);
            model.dispatch(NavbarAction::CloseMenu);
        })
    };
    let on_logo = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavSection::Home))
    };
    let on_toggle = {
        let model = model.dispatcher();
        Callback::from(move |_: MouseEvent| model.dispatch(NavbarAction::ToggleMenu))
    };
    let on_backdrop = {
        let model = model.dispatcher();
        Callback::from(move |_: MouseEvent| model.dispatch(NavbarAction::CloseMenu))
    };

    let state = model.0;
    let resume_url = app_router::resume_url();
    let desktop_links: Html = MENU_SECTIONS
        .iter()
        .map(|section| {
            html! {
                <SectionLink
                    key={section.id()}
                    section={*section}
                    class={classes!("nav-link")}
                    onnavigate={navigate.clone()}
                />
            }
        })
        .collect();
    let mobile_links: Html = MENU_SECTIONS
        .iter()
        .map(|section| {
            html! {
                <SectionLink
                    key={section.id()}
                    section={*section}
                    class={classes!("mobile-link")}
                    onnavigate={navigate.clone()}
                />
            }
        })
        .collect();
    let mobile_menu = if state.menu_open() {
        html! {
            <>
                <div class="menu-backdrop" onclick={on_backdrop}></div>
                <div class="menu-panel">
                    <ul class="mobile-links">
                        { mobile_links }
                        <li class="mobile-resume">
                            <a class="resume-button" href={resume_url} target="_blank" rel="noopener">
                                { "Resume" }
                            </a>
                        </li>
                    </ul>
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <nav class={classes!("navbar", state.has_shadow().then_some("shadow"))}>
            <div class="navbar-inner">
                <img
                    class="logo"
                    src={app_router::logo_src()}
                    alt="Logo"
                    onclick={on_logo}
                />
                <ul class="nav-links">{ desktop_links }</ul>
                <a class="resume-button desktop-only" href={resume_url} target="_blank" rel="noopener">
                    { "Resume" }
                </a>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label={if state.menu_open() { "Close menu" } else { "Open menu" }}
                    aria-expanded={state.menu_open().to_string()}
                    onclick={on_toggle}
                >
                    { if state.menu_open() { "\u{2715}" } else { "\u{2630}" } }
                </button>
            </div>
            { mobile_menu }
        </nav>
    }
}
