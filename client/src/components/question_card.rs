//! One question with its answer controls.
//!
//! Every question is rendered up front and hidden unless it is the visible
//! one, so entries survive navigation without any extra bookkeeping.

#[cfg(test)]
#[path = "question_card_test.rs"]
mod question_card_test;

use leptos::prelude::*;
use navigator::answer::{FALSE_VALUE, TRUE_VALUE};
use navigator::paper::{AnswerInput, ExamPaper};

use crate::state::exam::ExamSignals;

fn edit(paper: RwSignal<ExamPaper>, index: usize, f: impl FnOnce(&mut AnswerInput)) {
    paper.update(|p| {
        if let Some(question) = p.question_mut(index) {
            f(&mut question.input);
        }
    });
}

/// Inline `display` for a card, so hiding does not depend on a stylesheet.
#[must_use]
pub fn display_for(hidden: bool) -> &'static str {
    if hidden { "none" } else { "block" }
}

#[component]
pub fn QuestionCard(signals: ExamSignals, index: usize) -> impl IntoView {
    let paper = signals.paper;
    let Some(question) = paper.with_untracked(|p| p.question(index).cloned()) else {
        return ().into_any();
    };
    let hidden = move || signals.visible.get() != Some(index);
    let marked = move |i: usize| move || paper.with(|p| p.question(index).is_some_and(|q| q.input.is_marked(i)));
    let name = format!("answer-{}", question.id);

    let controls = match &question.input {
        AnswerInput::SingleChoice { options, .. } => options
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                view! {
                    <label class="question__option">
                        <input
                            type="radio"
                            name=name.clone()
                            value=choice.value.clone()
                            prop:checked=marked(i)
                            on:change=move |_| edit(paper, index, |input| {
                                input.select(i);
                            })
                        />
                        <span>{choice.label.clone()}</span>
                    </label>
                }
            })
            .collect::<Vec<_>>()
            .into_any(),
        AnswerInput::MultipleChoice { options, .. } => options
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                view! {
                    <label class="question__option">
                        <input
                            type="checkbox"
                            name=name.clone()
                            value=choice.value.clone()
                            prop:checked=marked(i)
                            on:change=move |_| edit(paper, index, |input| {
                                input.toggle(i);
                            })
                        />
                        <span>{choice.label.clone()}</span>
                    </label>
                }
            })
            .collect::<Vec<_>>()
            .into_any(),
        AnswerInput::ShortText { multiline, .. } => {
            let text = move || {
                paper.with(|p| match p.question(index).map(|q| &q.input) {
                    Some(AnswerInput::ShortText { text, .. }) => text.clone(),
                    _ => String::new(),
                })
            };
            let on_input = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                edit(paper, index, |input| {
                    input.set_text(value);
                });
            };
            if *multiline {
                view! { <textarea class="question__text" name=name prop:value=text on:input=on_input></textarea> }
                    .into_any()
            } else {
                view! { <input class="question__text" type="text" name=name prop:value=text on:input=on_input/> }
                    .into_any()
            }
        }
        AnswerInput::TrueFalse { .. } => {
            let truth = move |value: bool| {
                move || {
                    paper.with(|p| {
                        matches!(
                            p.question(index).map(|q| &q.input),
                            Some(AnswerInput::TrueFalse { selected: Some(v) }) if *v == value
                        )
                    })
                }
            };
            [(true, TRUE_VALUE), (false, FALSE_VALUE)]
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <label class="question__option">
                            <input
                                type="radio"
                                name=name.clone()
                                value=label
                                prop:checked=truth(value)
                                on:change=move |_| edit(paper, index, |input| {
                                    input.set_truth(value);
                                })
                            />
                            <span>{label}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <section
            class="question"
            class:question--hidden=hidden
            style:display=move || display_for(hidden())
            data-question-id=question.id.to_string()>
            <p class="question__prompt">{question.prompt.clone()}</p>
            <div class="question__controls">{controls}</div>
        </section>
    }
    .into_any()
}
