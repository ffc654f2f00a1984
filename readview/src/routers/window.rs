use iced::{Size, Task};

use crate::app::{App, AppEvent};

/// Handle window resize events; the panel bounds follow the new size.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    Task::none()
}
