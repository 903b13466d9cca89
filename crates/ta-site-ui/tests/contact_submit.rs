//! Contact Submit Event Tests
//!
//! Mounts the stateful contact section and drives a real `submit` event
//! through the runtime, the same path a desktop webview takes.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::html::*;
use dioxus::prelude::*;
use ta_site_ui::sections::ContactSection;

// ============================================================================
// Test Utilities
// ============================================================================

/// Form payload with no fields; the section never reads the values.
struct EmptyForm;

impl HasFileData for EmptyForm {}

impl HasFormData for EmptyForm {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Event converter that only knows how to build form data.
struct FormOnlyConverter;

macro_rules! unsupported {
    ($($method:ident -> $data:ty),* $(,)?) => {
        $(
            fn $method(&self, _: &PlatformEventData) -> $data {
                unimplemented!("only form events are dispatched in these tests")
            }
        )*
    };
}

impl HtmlEventConverter for FormOnlyConverter {
    fn convert_form_data(&self, _: &PlatformEventData) -> FormData {
        FormData::new(EmptyForm)
    }

    unsupported!(
        convert_animation_data -> AnimationData,
        convert_clipboard_data -> ClipboardData,
        convert_composition_data -> CompositionData,
        convert_drag_data -> DragData,
        convert_focus_data -> FocusData,
        convert_image_data -> ImageData,
        convert_keyboard_data -> KeyboardData,
        convert_media_data -> MediaData,
        convert_mounted_data -> MountedData,
        convert_mouse_data -> MouseData,
        convert_pointer_data -> PointerData,
        convert_resize_data -> ResizeData,
        convert_scroll_data -> ScrollData,
        convert_selection_data -> SelectionData,
        convert_toggle_data -> ToggleData,
        convert_touch_data -> TouchData,
        convert_transition_data -> TransitionData,
        convert_visible_data -> VisibleData,
        convert_wheel_data -> WheelData,
    );
}

/// Mount the contact section and return it with its form's submit listener.
fn mount_contact() -> (VirtualDom, ElementId) {
    set_event_converter(Box::new(FormOnlyConverter));

    let mut dom = VirtualDom::new(ContactSection);
    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);

    let submit = mutations
        .edits
        .iter()
        .find_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "submit" => Some(*id),
            _ => None,
        })
        .expect("contact form registers a submit listener");

    (dom, submit)
}

fn submit_event() -> Event<dyn Any> {
    Event::new(
        Rc::new(PlatformEventData::new(Box::new(()))) as Rc<dyn Any>,
        true,
    )
}

// ============================================================================
// Submit Flow Tests
// ============================================================================

#[test]
fn test_submit_replaces_form_with_confirmation() {
    let (mut dom, submit) = mount_contact();

    let before = dioxus_ssr::render(&dom);
    assert!(before.contains("<form"));
    assert!(!before.contains("be in touch shortly."));

    let event = submit_event();
    dom.runtime().handle_event("submit", event.clone(), submit);
    dom.render_immediate(&mut Mutations::default());

    let after = dioxus_ssr::render(&dom);
    assert!(!after.contains("<form"));
    assert!(!after.contains("<input"));
    assert!(after.contains("Thanks! We"));
    assert!(after.contains("be in touch shortly."));
}

#[test]
fn test_submit_prevents_default_navigation() {
    let (mut dom, submit) = mount_contact();

    let event = submit_event();
    assert!(event.default_action_enabled());

    dom.runtime().handle_event("submit", event.clone(), submit);
    dom.render_immediate(&mut Mutations::default());

    assert!(!event.default_action_enabled());
}
