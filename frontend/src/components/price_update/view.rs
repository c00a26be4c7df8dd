//! View rendering for the price update page.
//!
//! Layout: a header with the file picker and the two action buttons, then the
//! main area with the notice and invalid-file banners and the results table.
//!
//! Notes
//! - All user-facing text is in Portuguese.
//! - Buttons are disabled from the workflow gating; the workflow still refuses
//!   out-of-order messages on its own.

use common::currency::format_currency;
use common::model::product::{RowStatus, ValidatedProduct};
use common::shape::ShapeFeedback;
use common::workflow::{Action, Notice};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PriceUpdateComponent;

const ERROR_COLOR: &str = "color: #DA0C21;";
const OK_COLOR: &str = "color: #1446A0;";

pub fn view(component: &PriceUpdateComponent, ctx: &Context<PriceUpdateComponent>) -> Html {
    let link = ctx.link();
    let workflow = &component.workflow;

    html! {
        <div>
            { build_header(component, link) }
            <main>
                {
                    match workflow.notice() {
                        Some(notice) => build_notice(notice, link),
                        None => html! {},
                    }
                }
                {
                    match workflow.feedback() {
                        Some(feedback) => build_feedback(&feedback),
                        None => html! {},
                    }
                }
                {
                    match workflow.table_data() {
                        Some(rows) => build_table(rows),
                        None => html! {},
                    }
                }
            </main>
        </div>
    }
}

fn build_header(component: &PriceUpdateComponent, link: &Scope<PriceUpdateComponent>) -> Html {
    let pending = component.workflow.pending();
    let validate_label = if pending == Some(Action::Validate) { "Validando..." } else { "Validar" };
    let update_label = if pending == Some(Action::Update) { "Atualizando..." } else { "Atualizar" };

    html! {
        <header>
            <h1>{"Ferramenta de Atualizar Preço"}</h1>

            <input
                class="file-input__input"
                type="file"
                accept=".csv"
                ref={component.file_input_ref.clone()}
                disabled={component.is_busy()}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    input
                        .files()
                        .and_then(|files| files.get(0))
                        .map(Msg::FileChosen)
                })}
            />

            <div class="header-form">
                <button
                    type="button"
                    disabled={!component.validate_enabled()}
                    onclick={link.callback(|_| Msg::Validate)}
                >
                    { validate_label }
                </button>
                <button
                    type="button"
                    disabled={!component.update_enabled()}
                    onclick={link.callback(|_| Msg::Update)}
                >
                    { update_label }
                </button>
            </div>
        </header>
    }
}

fn build_notice(notice: &Notice, link: &Scope<PriceUpdateComponent>) -> Html {
    html! {
        <div class="notice" style={ERROR_COLOR}>
            <p>
                <strong>{ notice.message() }</strong>
                {" "}
                <button type="button" onclick={link.callback(|_| Msg::DismissNotice)}>{"Fechar"}</button>
            </p>
        </div>
    }
}

/// Invalid-file banner, echoing what the file actually contains.
fn build_feedback(feedback: &ShapeFeedback) -> Html {
    html! {
        <div style={ERROR_COLOR}>
            <p><strong>{ feedback.title.clone() }</strong></p>
            <p>{ feedback.expectation.clone() }</p>
            <p>{ feedback.observed.clone() }</p>
        </div>
    }
}

fn build_table(rows: &[ValidatedProduct]) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{"Código"}</th>
                    <th>{"Nome"}</th>
                    <th>{"Preço Atual"}</th>
                    <th>{"Novo Preço"}</th>
                    <th>{"Validação"}</th>
                </tr>
            </thead>
            <tbody>
                { for rows.iter().enumerate().map(|(index, product)| html! {
                    <tr key={index}>
                        <td>{ product.code.clone() }</td>
                        <td>{ product.name.clone() }</td>
                        <td>{ format_currency(product.current_price) }</td>
                        <td>{ format_currency(product.new_price) }</td>
                        <td>{ build_status(product.status()) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn build_status(status: RowStatus<'_>) -> Html {
    match status {
        RowStatus::Validated => html! {
            <ul><li style={OK_COLOR}>{"Validado!"}</li></ul>
        },
        RowStatus::Rejected(errors) => html! {
            <ul style={ERROR_COLOR}>
                { for errors.iter().map(|error| html! { <li>{ error.clone() }</li> }) }
            </ul>
        },
    }
}
