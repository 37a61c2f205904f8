/*!
The traits that interactive parts of the browser implement.
*/
use crate::rendering::Fabric;

/// Something that reacts to events by emitting effects and that can be drawn.
pub trait Component<Event, Effect> {
    /// Return the effect to run once the component has been created.
    fn on_created(&mut self) -> Option<Effect> {
        None
    }

    fn handle(&mut self, event: Event) -> Option<Effect>;

    /// Draw the component. The result depends only on the state of the component.
    fn render(&self) -> Fabric;
}

/// State that changes by performing actions.
pub trait Stateful<Action, Effect> {
    fn perform(&mut self, action: Action) -> Option<Effect>;
}
