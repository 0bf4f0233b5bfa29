use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::use_event_listener;
use web_sys::ScrollToOptions;

use super::content;
use crate::carousel::{Carousel, CarouselConfig, ScrollBehavior, ScrollCommand};
use crate::content::ProjectRecord;

fn apply_scroll(container: NodeRef<html::Div>, cmd: ScrollCommand) {
    let Some(el) = container.get_untracked() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_left(cmd.offset);
    opts.set_behavior(match cmd.behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    el.scroll_to_with_scroll_to_options(&opts);
}

fn card_class(gradient: &str, highlighted: bool, selected: bool) -> String {
    let look = if highlighted {
        format!("bg-gradient-to-br {gradient} border-transparent scale-105 shadow-2xl z-10")
    } else {
        "bg-gray-900/80 border-gray-800 hover:bg-gray-800/80 hover:border-gray-700".to_string()
    };
    let ring = if selected {
        " ring-2 ring-white/50 ring-offset-2 ring-offset-black"
    } else {
        ""
    };
    format!(
        "flex-shrink-0 w-80 p-6 rounded-xl border cursor-pointer text-white transition-all duration-500 ease-out relative overflow-hidden {look}{ring}"
    )
}

fn dot_class(selected: bool) -> &'static str {
    if selected {
        "h-2 w-8 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 shadow-lg transition-all duration-300"
    } else {
        "h-2 w-2 rounded-full bg-gray-600 hover:bg-gray-400 transition-all duration-300"
    }
}

#[component]
pub fn ProjectsCarousel(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let carousel = Carousel::initialize(content().projects.clone(), CarouselConfig::default())
        .expect("Project content should be a valid carousel configuration");
    let cards = carousel.render_sequence();
    let records = StoredValue::new(carousel.records().to_vec());
    let (snapshot, set_snapshot) = signal(carousel.snapshot());
    let carousel = Arc::new(Mutex::new(carousel));
    let shared = StoredValue::new(carousel.clone());
    let container = NodeRef::<html::Div>::new();

    // Every controller transition goes through here so the viewport width is
    // current and the resulting scroll is applied once the lock is released.
    let drive = move |op: &dyn Fn(&mut Carousel) -> Option<ScrollCommand>| {
        let width = container
            .get_untracked()
            .map(|el| f64::from(el.client_width()));
        let (cmd, snap) = shared.with_value(|c| {
            let mut c = c.lock().expect("should be able to lock carousel");
            if let Some(width) = width {
                c.set_viewport_width(width);
            }
            let cmd = op(&mut *c);
            (cmd, c.snapshot())
        });
        if snapshot.get_untracked() != snap {
            set_snapshot.set(snap);
        }
        if let Some(cmd) = cmd {
            apply_scroll(container, cmd);
        }
    };

    // Effects only run in the browser, so the timer never starts during SSR.
    Effect::new(move |_| {
        drive(&|c| Some(c.recenter()));
        let period = shared.with_value(|c| {
            c.lock()
                .expect("should be able to lock carousel")
                .auto_advance_period()
        });
        match set_interval_with_handle(move || drive(&|c| c.tick()), period) {
            Ok(handle) => shared.with_value(|c| {
                c.lock()
                    .expect("should be able to lock carousel")
                    .attach_timer(handle)
            }),
            Err(err) => log::warn!("couldn't start auto-advance timer: {err:?}"),
        }
    });

    let stop_scroll = use_event_listener(container, ev::scroll, move |_| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let offset = f64::from(el.scroll_left());
        drive(&|c| c.on_scroll_boundary(offset));
    });

    on_cleanup(move || {
        stop_scroll();
        if let Ok(mut c) = carousel.lock() {
            c.teardown();
        }
    });

    let displayed = move || records.with_value(|r| r[snapshot.get().displayed()].clone());

    let card_views = cards
        .into_iter()
        .map(|card| {
            let index = card.logical_index;
            let record = records.with_value(|r| r[index].clone());
            let gradient = record.gradient_classes();
            let (click_id, hover_id) = (card.id.clone(), card.id.clone());
            let tags = move || {
                let expanded = snapshot.get().is_selected(index);
                let (shown, hidden) = records.with_value(|r| {
                    let (shown, hidden) = r[index].visible_tags(expanded);
                    (shown.to_vec(), hidden)
                });
                let shown = shown
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs px-2 py-1 rounded-full bg-white/10 border border-white/20">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view();
                let more = (hidden > 0).then(|| {
                    view! { <span class="text-xs text-gray-500">{format!("+{hidden}")}</span> }
                });
                view! {
                    {shown}
                    {more}
                }
            };

            view! {
                <div
                    data-key=card.key()
                    class=move || {
                        let snap = snapshot.get();
                        card_class(&gradient, snap.is_highlighted(index), snap.is_selected(index))
                    }
                    on:click=move |_| {
                        drive(
                            &|c| Some(
                                c
                                    .select(&click_id)
                                    .expect("rendered card should resolve to a logical record"),
                            ),
                        )
                    }
                    on:mouseenter=move |_| {
                        drive(
                            &|c| {
                                c.hover(Some(&hover_id))
                                    .expect("rendered card should resolve to a logical record");
                                None
                            },
                        )
                    }
                    on:mouseleave=move |_| {
                        drive(
                            &|c| {
                                c.hover(None).ok();
                                None
                            },
                        )
                    }
                >
                    <div class="relative z-10">
                        <div class="flex items-center justify-between mb-4">
                            <div class="text-sm font-medium text-white/80">
                                {record.label().into_owned()}
                            </div>
                            <Show when=move || snapshot.get().is_selected(index)>
                                <div class="w-3 h-3 bg-white rounded-full animate-pulse shadow-lg" />
                            </Show>
                        </div>
                        <h3 class="text-lg font-bold mb-3">{record.title.clone()}</h3>
                        <p class=move || {
                            if snapshot.get().is_selected(index) {
                                "text-sm mb-4 text-white/90"
                            } else {
                                "text-sm mb-4 text-gray-300 line-clamp-2"
                            }
                        }>{record.description.clone()}</p>
                        <div class="flex flex-wrap gap-1 mb-4">{tags}</div>
                        <span class="text-xs font-medium text-white/80">
                            {record.action_label()}
                        </span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = records.with_value(|r| {
        r.iter()
            .enumerate()
            .map(|(index, record)| {
                let id = record.id.clone();
                let label = format!("Show {}", record.title);
                view! {
                    <button
                        aria-label=label
                        class=move || dot_class(snapshot.get().is_selected(index))
                        on:click=move |_| {
                            drive(
                                &|c| Some(
                                    c
                                        .select(&id)
                                        .expect("navigation dot should resolve to a logical record"),
                                ),
                            )
                        }
                    />
                }
            })
            .collect_view()
    });

    view! {
        <section id="projects" class="relative z-10 py-20 overflow-hidden">
            <div class="absolute inset-0 transition-all duration-1000 ease-out">
                <div class=move || {
                    format!(
                        "absolute inset-0 opacity-10 bg-gradient-to-br {}",
                        displayed().gradient_classes(),
                    )
                } />
                <div
                    class="absolute right-0 top-1/2 -translate-y-1/2 w-1/2 h-3/4 opacity-5 rounded-3xl bg-cover bg-center transition-all duration-1000"
                    style=move || {
                        displayed()
                            .theme
                            .mockup_image
                            .map(|url| format!("background-image: url({url}); filter: blur(2px);"))
                            .unwrap_or_default()
                    }
                />
            </div>
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono mb-4">
                        {subtitle}
                    </p>
                    <h2 class="text-4xl md:text-5xl font-light text-white mb-8 tracking-tight">
                        {title}
                    </h2>
                    <button
                        class="text-gray-400 hover:text-white text-sm"
                        on:click=move |_| {
                            drive(
                                &|c| {
                                    c.toggle_auto_advance();
                                    None
                                },
                            )
                        }
                    >
                        {move || {
                            if snapshot.get().auto_advance {
                                "❚❚ Pause Auto-scroll"
                            } else {
                                "▶ Play Auto-scroll"
                            }
                        }}
                    </button>
                </div>
                {move || view! { <ProjectDetails record=displayed() /> }}
                <div
                    node_ref=container
                    class="flex gap-6 overflow-x-auto pb-8 pt-4 scrollbar-hide"
                    on:mouseenter=move |_| {
                        drive(
                            &|c| {
                                c.pointer_entered_region();
                                None
                            },
                        )
                    }
                    on:mouseleave=move |_| {
                        drive(
                            &|c| {
                                c.pointer_left_region();
                                None
                            },
                        )
                    }
                >
                    {card_views}
                </div>
                <div class="flex items-center justify-center gap-3 mt-8">{dots}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectDetails(record: ProjectRecord) -> impl IntoView {
    let tags = record
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="text-xs bg-gradient-to-r from-blue-500/20 to-purple-500/20 text-blue-300 px-3 py-1 rounded-full border border-blue-500/20">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();
    let links = record
        .links
        .iter()
        .map(|(kind, url)| {
            view! {
                <a
                    href=url.to_string()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="rounded-full px-6 py-2 text-sm font-medium border border-gray-600 text-gray-300 hover:bg-gray-800 hover:text-white"
                >
                    {kind.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="text-center mb-12 transition-all duration-500">
            <div class="max-w-2xl mx-auto bg-black/20 rounded-2xl p-8 border border-gray-800">
                <div class="text-sm text-blue-400 mb-2 font-semibold">
                    {record.label().into_owned()}
                </div>
                <h3 class="text-2xl md:text-3xl font-bold text-white mb-4">{record.title.clone()}</h3>
                <p class="text-gray-300 text-sm md:text-base mb-6 leading-relaxed">
                    {record.description.clone()}
                </p>
                <div class="flex items-center justify-center gap-2 mb-6 flex-wrap">{tags}</div>
                <div class="flex items-center justify-center gap-4">{links}</div>
            </div>
        </div>
    }
}
