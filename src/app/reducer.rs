use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::ui::update,
        features::ticker::update,
        features::news::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }

    tracing::trace!(?action, "unhandled action");
    None
}
