use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent
/// decides where each child goes.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift returned commands with [`Command::map`]. A widget that wants to
/// change state owned by its parent returns a message describing the change;
/// the parent intercepts that variant, applies it and pushes the new state
/// back into the widget:
///
/// ```rust,ignore
/// use pickbox_core::{Command, Component, Model};
/// use pickbox_widgets::select::{self, Select};
///
/// enum Msg { Fruit(select::Message) }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Fruit(select::Message::Changed(value)) => {
///             self.fruit = value.clone();
///             self.fruit_select.set_value(value);
///             Command::none()
///         }
///         Msg::Fruit(m) => self.fruit_select.update(m).map(Msg::Fruit),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate local state, and return a [`Command`].
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Overlays such as dropdown menus may extend past
    /// `area` but must stay inside the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus. The default is `false`.
    fn focused(&self) -> bool {
        false
    }
}
