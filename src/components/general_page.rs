use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Styled, div, prelude::*, px, rgb,
};
use gpui_component::{
    Disableable, IconName,
    button::{Button, ButtonVariants},
    checkbox::Checkbox,
    input::TextInput,
    slider::{Slider, SliderState},
};

use crate::components::LauncherView;

fn section_label(text: &'static str) -> impl IntoElement + use<> {
    div().text_sm().text_color(rgb(0x888888)).child(text)
}

fn memory_row(
    label: &'static str,
    mib: u32,
    slider: &Entity<SliderState>,
    editable: bool,
) -> impl IntoElement + use<> {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_1()
        .child(format!("{}:  {} MiB", label, mib))
        .child(
            div()
                .w_full()
                .child(Slider::new(slider).disabled(!editable)),
        )
}

pub fn render(view: &LauncherView, cx: &mut Context<LauncherView>) -> impl IntoElement + use<> {
    let general = view.model.general();

    let keep_memory_same = Checkbox::new("keep-memory-same")
        .label("Keep initial and maximum memory allocations the same")
        .checked(general.keeps_memory_same())
        .on_click(cx.listener(|view, checked: &bool, window, cx| {
            view.model.general_mut().set_keep_memory_same(*checked);
            view.sync_max_memory(window, cx);
            cx.notify();
        }));

    let memory = div()
        .flex()
        .flex_col()
        .gap(px(30.))
        .child(memory_row(
            "Initial Memory",
            general.initial_memory(),
            &view.initial_memory,
            true,
        ))
        .child(memory_row(
            "Maximum Memory",
            general.max_memory(),
            &view.max_memory,
            general.is_max_memory_editable(),
        ));

    let window_size = div()
        .flex()
        .items_center()
        .gap(px(30.))
        .child(div().flex_none().child("Window width"))
        .child(TextInput::new(&view.window_width))
        .child(div().flex_none().child("Window height"))
        .child(TextInput::new(&view.window_height));

    let jre_enabled = general.is_jre_path_editable();
    let custom_jre = div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(6.))
        .child(
            Checkbox::new("use-custom-jre")
                .label("Use custom jre")
                .checked(general.is_using_custom_jre())
                .on_click(cx.listener(|view, checked: &bool, _, cx| {
                    view.model.general_mut().set_use_custom_jre(*checked);
                    cx.notify();
                })),
        )
        .child(
            div()
                .flex()
                .w_full()
                .gap(px(6.))
                .child(TextInput::new(&view.jre_path).disabled(!jre_enabled))
                .child(
                    Button::new("browse-jre")
                        .icon(IconName::FolderOpen)
                        .ghost()
                        .disabled(!jre_enabled)
                        .on_click(cx.listener(|view, _: &ClickEvent, window, cx| {
                            view.browse_jre(window, cx);
                        })),
                ),
        );

    let jvm_args = div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(6.))
        .child(section_label("JVM Arguments"))
        .child(TextInput::new(&view.jvm_args));

    div()
        .flex()
        .flex_col()
        .gap(px(40.))
        .py(px(10.))
        .child(div().flex().justify_center().child(keep_memory_same))
        .child(memory)
        .child(window_size)
        .child(custom_jre)
        .child(jvm_args)
}
