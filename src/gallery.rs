use std::rc::Rc;

use folio_core::{partition, NavSection, ProjectRecord, SlideDirection, PROJECT_CATALOG};
use gloo::events::EventListener;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::dom;
use crate::gallery_core::{GalleryAction, GalleryCore, GallerySnapshot, SLIDE_TRANSITION_MS};

const CARD_STAGGER_MS: usize = 150;

#[derive(Properties)]
struct CardProps {
    core: Rc<GalleryCore>,
    project: &'static ProjectRecord,
    slot: usize,
    revealed: bool,
}

impl PartialEq for CardProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && std::ptr::eq(self.project, other.project)
            && self.slot == other.slot
            && self.revealed == other.revealed
    }
}

#[function_component(ProjectCard)]
fn project_card(props: &CardProps) -> Html {
    let project = props.project;
    let onclick = {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.apply_action(GalleryAction::CardClick(project)))
    };
    let onmouseenter = {
        let core = props.core.clone();
        Callback::from(move |event: MouseEvent| {
            core.apply_action(GalleryAction::HoverEnter(project));
            core.apply_action(GalleryAction::PointerMove {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        })
    };
    let onmouseleave = {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.apply_action(GalleryAction::HoverLeave))
    };
    let roles: Html = project
        .roles()
        .map(|role| html! { <span class="chip chip-role">{ role }</span> })
        .collect();
    let tools: Html = project
        .tool_labels()
        .map(|tool| html! { <span class="chip chip-tool">{ tool }</span> })
        .collect();
    let style = format!("animation-delay: {}ms;", props.slot * CARD_STAGGER_MS);

    html! {
        <article
            class={classes!(
                "project-card",
                props.revealed.then_some("revealed"),
                project.has_link().then_some("linked"),
            )}
            {style}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-image">
                <img src={project.image} alt={project.name} loading="eager" />
            </div>
            <div class="card-body">
                <p class="card-category">{ project.category }</p>
                <h3 class="card-title">{ project.name }</h3>
                <p class="card-description">{ project.description }</p>
                <div class="chips">{ roles }</div>
                <div class="chips">{ tools }</div>
            </div>
        </article>
    }
}

fn track_style(snapshot: &GallerySnapshot) -> String {
    let transition = if snapshot.swiping {
        "none".to_string()
    } else {
        format!("transform {SLIDE_TRANSITION_MS}ms ease")
    };
    format!(
        "transform: translateX(calc({}% + {}px)); transition: {};",
        -100.0 * snapshot.active_index as f64,
        snapshot.swipe_offset,
        transition
    )
}

fn tooltip(snapshot: &GallerySnapshot) -> Html {
    let (Some(preview), Some((left, top))) = (snapshot.preview, snapshot.tooltip) else {
        return html! {};
    };
    html! {
        <div class="preview-tooltip" style={format!("left: {left}px; top: {top}px;")}>
            <img src={preview.src} alt="preview" loading="eager" />
            <span>{ preview.label() }</span>
        </div>
    }
}

#[function_component(ProjectGallery)]
pub(crate) fn project_gallery() -> Html {
    let core = use_memo((), |_| GalleryCore::new(PROJECT_CATALOG, dom::viewport_width()));
    let core: Rc<GalleryCore> = (*core).clone();
    let snapshot = use_state(|| core.snapshot());
    let section_ref = use_node_ref();
    let viewport_ref = use_node_ref();

    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    {
        let core = core.clone();
        let section_ref = section_ref.clone();
        use_effect_with((), move |_| {
            let report_position = {
                let core = core.clone();
                move || {
                    let Some(section) = section_ref.cast::<Element>() else {
                        return;
                    };
                    let rect = section.get_bounding_client_rect();
                    core.apply_action(GalleryAction::Reveal {
                        top: rect.top(),
                        bottom: rect.bottom(),
                        viewport_height: dom::viewport_height(),
                    });
                }
            };
            core.apply_action(GalleryAction::Resize {
                width: dom::viewport_width(),
            });
            report_position();
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                let resize_core = core.clone();
                listeners.push(EventListener::new(&window, "resize", move |_event| {
                    resize_core.apply_action(GalleryAction::Resize {
                        width: dom::viewport_width(),
                    });
                }));
                listeners.push(EventListener::new(&window, "scroll", move |_event| {
                    report_position();
                }));
            }
            move || drop(listeners)
        });
    }

    let snapshot = (*snapshot).clone();
    let pages = partition(PROJECT_CATALOG, snapshot.bucket);

    let onmousemove = {
        let core = core.clone();
        Callback::from(move |event: MouseEvent| {
            core.apply_action(GalleryAction::PointerMove {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        })
    };
    let on_prev = {
        let core = core.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            core.apply_action(GalleryAction::Step(SlideDirection::Prev));
        })
    };
    let on_next = {
        let core = core.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            core.apply_action(GalleryAction::Step(SlideDirection::Next));
        })
    };
    let onpointerdown = {
        let core = core.clone();
        Callback::from(move |event: PointerEvent| {
            if !event.is_primary() {
                return;
            }
            core.apply_action(GalleryAction::SwipeBegin {
                pointer_id: event.pointer_id(),
                x: f64::from(event.client_x()),
            });
        })
    };
    let onpointermove = {
        let core = core.clone();
        Callback::from(move |event: PointerEvent| {
            core.apply_action(GalleryAction::SwipeMove {
                pointer_id: event.pointer_id(),
                x: f64::from(event.client_x()),
            });
        })
    };
    let onpointerup = {
        let core = core.clone();
        let viewport_ref = viewport_ref.clone();
        Callback::from(move |event: PointerEvent| {
            let slide_width = viewport_ref
                .cast::<Element>()
                .map(|element| f64::from(element.client_width()))
                .unwrap_or(0.0);
            core.apply_action(GalleryAction::SwipeEnd {
                pointer_id: event.pointer_id(),
                slide_width,
            });
        })
    };
    let onpointerleave = onpointerup.clone();
    let onpointercancel = {
        let core = core.clone();
        Callback::from(move |_: PointerEvent| core.apply_action(GalleryAction::SwipeCancel))
    };

    let slides: Html = pages
        .into_iter()
        .enumerate()
        .map(|(page_index, page)| {
            let cards: Html = page
                .iter()
                .enumerate()
                .map(|(slot, project)| {
                    html! {
                        <ProjectCard
                            key={format!("{}-{}", project.id, snapshot.active_index)}
                            core={core.clone()}
                            {project}
                            {slot}
                            revealed={snapshot.revealed}
                        />
                    }
                })
                .collect();
            html! {
                <div class="slide" key={page_index}>
                    <div class="slide-cards">{ cards }</div>
                </div>
            }
        })
        .collect();
    let dots: Html = (0..snapshot.page_count)
        .map(|index| {
            let core = core.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                core.apply_action(GalleryAction::JumpTo(index));
            });
            html! {
                <button
                    type="button"
                    key={index}
                    class={classes!("dot", (index == snapshot.active_index).then_some("active"))}
                    aria-label={format!("Go to page {}", index + 1)}
                    {onclick}
                ></button>
            }
        })
        .collect();
    let prev_button = if snapshot.can_prev {
        html! {
            <button type="button" class="carousel-nav prev" aria-label="Previous slide" onclick={on_prev}>
                { "\u{2039}" }
            </button>
        }
    } else {
        html! {}
    };
    let next_button = if snapshot.can_next {
        html! {
            <button type="button" class="carousel-nav next" aria-label="Next slide" onclick={on_next}>
                { "\u{203A}" }
            </button>
        }
    } else {
        html! {}
    };
    let touch_paging = snapshot.bucket.allows_touch_paging();

    html! {
        <section id={NavSection::Projects.id()} class="projects" ref={section_ref}>
            <h2 class="projects-title">{ "My " }<span>{ "Projects" }</span></h2>
            <div class="gallery" {onmousemove}>
                { tooltip(&snapshot) }
                { prev_button }
                { next_button }
                <div
                    key={format!("carousel-{}", snapshot.bucket)}
                    class={classes!("carousel", touch_paging.then_some("touch"))}
                    ref={viewport_ref}
                    {onpointerdown}
                    {onpointermove}
                    {onpointerup}
                    {onpointerleave}
                    {onpointercancel}
                >
                    <div class="track" style={track_style(&snapshot)}>{ slides }</div>
                </div>
            </div>
            <div class="dots">{ dots }</div>
        </section>
    }
}
