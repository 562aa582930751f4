use dioxus::prelude::*;
use dioxus_router::Link;

use couple_core::model::{CardColor, QuestionCount};
use couple_core::viewer::DismissReason;
use services::{CardGenerator, QuestionCatalog};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    ViewerVm, format_time_of_day, map_card_faces, map_category_options, map_customization,
    map_viewer,
};

const TIPS: [&str; 5] = [
    "Set aside dedicated time without distractions",
    "Take turns answering the questions",
    "Listen actively without interrupting your partner",
    "Remember there are no right or wrong answers",
    "Save any cards you love for future conversations",
];

#[component]
pub fn CardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            services
                .catalog_service()
                .load_all()
                .await
                .map_err(|_| ViewError::QuestionsUnavailable)
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page cards-page",
            header { class: "view-header",
                Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
                h2 { class: "view-title", "Couple Love Cards" }
                p { class: "view-subtitle",
                    "Create personalized conversation cards to deepen your connection with your partner."
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "loading-panel",
                        p { "Loading your perfect questions..." }
                        p { class: "muted", "This will just take a moment" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-panel",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(catalog) => rsx! {
                    CardWorkspace { catalog }
                },
            }
        }
    }
}

#[component]
fn CardWorkspace(catalog: QuestionCatalog) -> Element {
    let ctx = use_context::<AppContext>();
    let mut generator = use_signal(|| ctx.services().card_generator_with(catalog.clone()));
    let mut rng = use_signal(|| ctx.rng());

    let snapshot = generator.read();
    let categories = map_category_options(snapshot.catalog(), snapshot.category());
    let custom = map_customization(snapshot.options());
    let faces = map_card_faces(snapshot.viewer().cards());
    let viewer = map_viewer(snapshot.viewer());
    let generated_at = snapshot.generated_at().map(format_time_of_day);
    let fallback_note = (!snapshot.catalog().fallbacks().is_empty())
        .then_some("Some categories are using built-in questions.");
    let pool_empty = snapshot.catalog().pool(snapshot.category()).is_empty();
    drop(snapshot);
    let (min_count, max_count) = (QuestionCount::MIN, QuestionCount::MAX);

    rsx! {
        section { class: "panel",
            h3 { class: "panel-title", "Question Type" }
            if let Some(note) = fallback_note {
                p { class: "muted", "{note}" }
            }
            div { class: "category-grid",
                {categories.into_iter().map(|option| {
                    let mut generator = generator;
                    let id = option.id;
                    let class = if option.selected {
                        "category-option selected"
                    } else {
                        "category-option"
                    };
                    rsx! {
                        button {
                            key: "{id}",
                            class,
                            r#type: "button",
                            disabled: !option.available,
                            onclick: move |_| generator.write().select_category(id),
                            span { class: "category-emoji", "{option.emoji}" }
                            span { class: "category-name", "{option.name}" }
                            span { class: "category-description", "{option.description}" }
                        }
                    }
                })}
            }
        }

        section { class: "panel",
            h3 { class: "panel-title", "Customize Your Cards" }

            div { class: "field",
                h4 { "Card Style" }
                div { class: "choice-row",
                    {custom.styles.into_iter().map(|option| {
                        let mut generator = generator;
                        let style = option.style;
                        rsx! {
                            button {
                                key: "{option.name}",
                                class: if option.selected { "choice selected" } else { "choice" },
                                r#type: "button",
                                title: "{option.description}",
                                onclick: move |_| generator.write().options_mut().card_style = style,
                                "{option.name}"
                            }
                        }
                    })}
                }
            }

            div { class: "field",
                h4 { "Card Color" }
                div { class: "swatch-row",
                    {custom.swatches.into_iter().map(|swatch| {
                        let mut generator = generator;
                        let color = swatch.color;
                        rsx! {
                            button {
                                key: "{swatch.name}",
                                class: if swatch.selected { "swatch selected" } else { "swatch" },
                                r#type: "button",
                                title: "{swatch.name}",
                                style: "{swatch.css}",
                                onclick: move |_| generator.write().options_mut().card_color = color,
                            }
                        }
                    })}
                    input {
                        r#type: "color",
                        value: "{custom.color_hex}",
                        oninput: move |evt| {
                            if let Ok(color) = CardColor::parse(&evt.value()) {
                                generator.write().options_mut().card_color = color;
                            }
                        },
                    }
                }
            }

            div { class: "field",
                h4 { "Font Size" }
                div { class: "choice-row",
                    {custom.sizes.into_iter().map(|option| {
                        let mut generator = generator;
                        let size = option.size;
                        rsx! {
                            button {
                                key: "{option.label}",
                                class: if option.selected { "choice selected" } else { "choice" },
                                r#type: "button",
                                onclick: move |_| generator.write().options_mut().font_size = size,
                                "{option.label}"
                            }
                        }
                    })}
                }
            }

            div { class: "field",
                h4 { "Number of Questions: {custom.question_count}" }
                input {
                    r#type: "range",
                    min: "{min_count}",
                    max: "{max_count}",
                    value: "{custom.question_count}",
                    oninput: move |evt| {
                        let parsed = evt.value().parse::<u8>().ok().and_then(|v| QuestionCount::new(v).ok());
                        if let Some(count) = parsed {
                            generator.write().options_mut().question_count = count;
                        }
                    },
                }
            }

            div { class: "field",
                h4 { "Emoji Icons" }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: custom.include_emojis,
                        onchange: move |evt| generator.write().options_mut().include_emojis = evt.checked(),
                    }
                    span { "Show category emoji on cards" }
                }
            }

            div { class: "preview", style: "{custom.preview_card_css}",
                p { style: "{custom.preview_text_css}", "Preview of your card style" }
            }
        }

        div { class: "generate-row",
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: pool_empty,
                onclick: move |_| {
                    let mut rng = rng.write();
                    generator.write().generate(&mut *rng);
                },
                "Generate Cards"
            }
            if let Some(at) = generated_at {
                span { class: "muted", "Generated at {at}" }
            }
        }

        if !faces.is_empty() {
            section { class: "panel",
                h3 { class: "panel-title", "Question Cards" }
                div { class: "card-grid",
                    for face in faces {
                        div {
                            key: "{face.id}",
                            class: "{face.style_class}",
                            style: "{face.card_css}",
                            onclick: move |_| generator.write().reopen_viewer(),
                            if let Some(emoji) = face.emoji.clone() {
                                div { class: "card-emoji", "{emoji}" }
                            }
                            p { class: "card-question", style: "{face.text_css}", "{face.question}" }
                        }
                    }
                }
            }
        }

        section { class: "panel tips",
            h3 { class: "panel-title", "Tips for a great experience" }
            ul {
                for tip in TIPS {
                    li { key: "{tip}", "{tip}" }
                }
            }
        }

        if let Some(vm) = viewer {
            CardModal { vm, generator }
        }
    }
}

#[component]
fn CardModal(vm: ViewerVm, generator: Signal<CardGenerator>) -> Element {
    let mut generator = generator;
    let card = vm.card;
    rsx! {
        div {
            id: "card-modal",
            class: "modal-backdrop",
            tabindex: "0",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| generator.write().close_viewer(DismissReason::OutsideClick),
            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                Key::Escape => generator.write().close_viewer(DismissReason::Escape),
                Key::ArrowRight => generator.write().next_card(),
                Key::ArrowLeft => generator.write().previous_card(),
                _ => {}
            },
            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| generator.write().close_viewer(DismissReason::CloseButton),
                    "×"
                }
                div { class: "{card.style_class} card-face--large", style: "{card.card_css}",
                    if let Some(emoji) = card.emoji.clone() {
                        div { class: "card-emoji", "{emoji}" }
                    }
                    p { class: "card-question", style: "{card.text_css}", "{card.question}" }
                    span { class: "card-category", "{card.category_name}" }
                }
                div { class: "modal-nav",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_page,
                        onclick: move |_| generator.write().previous_card(),
                        "Previous"
                    }
                    span { class: "modal-position", "{vm.position}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_page,
                        onclick: move |_| generator.write().next_card(),
                        "Next"
                    }
                }
            }
        }
    }
}
