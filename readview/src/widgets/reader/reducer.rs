use iced::Task;

use super::command::ReaderCommand;
use super::event::ReaderEffect;
use super::state::ReaderState;
use super::storage::{ArticleLoad, ArticleLoadStatus, load_article};

/// Reduce a reader command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ReaderState,
    command: ReaderCommand,
) -> Task<ReaderEffect> {
    match command {
        ReaderCommand::Reload => request_load_article(),
        ReaderCommand::ContentLoaded(load) => {
            apply_loaded_article(state, load);
            Task::none()
        },
        ReaderCommand::ContentFailed(message) => {
            log::warn!("article read failed: {message}");
            Task::none()
        },
        ReaderCommand::ReplaceSettings(settings) => {
            state.replace_settings(settings);
            Task::none()
        },
    }
}

fn request_load_article() -> Task<ReaderEffect> {
    Task::perform(async { load_article() }, |result| match result {
        Ok(load) => ReaderEffect::ContentLoaded(load),
        Err(err) => ReaderEffect::ContentFailed(format!("{err}")),
    })
}

fn apply_loaded_article(state: &mut ReaderState, load: ArticleLoad) {
    let (content, status) = load.into_parts();
    match &status {
        ArticleLoadStatus::Invalid(message) => {
            log::warn!("article file invalid: {message}");
        },
        ArticleLoadStatus::Loaded => {
            log::info!("article loaded: {}", content.title());
        },
        ArticleLoadStatus::Bundled => {},
    }

    state.replace_content(content);
}
