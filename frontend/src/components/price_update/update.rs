//! Update function for the price update page.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, feeds
//! the event to the `Workflow` and returns whether the view should re-render.
//! Remote calls and file reads run in `spawn_local` tasks that report back
//! with a follow-up message.

use gloo_file::futures::read_as_bytes;
use gloo_file::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::IntakeError;

use crate::api;

use super::helpers::{clear_file_input, show_toast};
use super::messages::Msg;
use super::state::PriceUpdateComponent;

/// Central update function for the component.
///
/// Out-of-order actions are refused by the workflow itself; they are logged
/// and ignored here.
pub fn update(
    component: &mut PriceUpdateComponent,
    ctx: &Context<PriceUpdateComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetConfig(config) => {
            log::debug!("catalog service at {}", config.api_base_url);
            component.config = config;
            false
        }
        Msg::FileChosen(file) => {
            if component.is_busy() {
                log::warn!("file picked while busy, ignoring");
                return false;
            }
            component.reading_file = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = File::from(file);
                let name = file.name();
                let contents = read_as_bytes(&file).await.map_err(|e| e.to_string());
                link.send_message(Msg::FileRead { name, contents });
            });
            true
        }
        Msg::FileRead { name, contents } => {
            component.reading_file = false;
            let outcome = match contents {
                Ok(bytes) => component.workflow.select_file(&name, &bytes),
                Err(reason) => {
                    component
                        .workflow
                        .reject_file(IntakeError::Unreadable { name, reason });
                    Ok(())
                }
            };
            if let Err(err) = outcome {
                log::warn!("{}", err);
            }
            true
        }
        Msg::Validate => match component.workflow.begin_validation() {
            Ok(rows) => {
                let config = component.config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::validate_products(&config, &rows).await;
                    link.send_message(Msg::ValidationFinished(result));
                });
                true
            }
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        },
        Msg::ValidationFinished(result) => {
            if let Err(err) = component.workflow.complete_validation(result) {
                log::error!("{}", err);
            }
            true
        }
        Msg::Update => match component.workflow.begin_update() {
            Ok(rows) => {
                let config = component.config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::update_products(&config, &rows).await;
                    link.send_message(Msg::UpdateFinished(result));
                });
                true
            }
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        },
        Msg::UpdateFinished(result) => {
            let succeeded = result.is_ok();
            match component.workflow.complete_update(result) {
                Ok(()) if succeeded => {
                    clear_file_input(&component.file_input_ref);
                    show_toast("Preços atualizados com sucesso.");
                }
                Ok(()) => {}
                Err(err) => log::error!("{}", err),
            }
            true
        }
        Msg::DismissNotice => {
            component.workflow.dismiss_notice();
            true
        }
    }
}
