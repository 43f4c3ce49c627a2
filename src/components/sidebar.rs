use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, SharedString, Styled, div, prelude::*, px,
    rgb,
};
use gpui_component::{
    Disableable, IconName,
    button::{Button, ButtonVariants},
};
use lc_config::PageIcon;

use crate::components::LauncherView;
use crate::components::launcher_view::on_launch_click;

fn icon_for(icon: PageIcon) -> IconName {
    match icon {
        PageIcon::Cog => IconName::Settings,
        PageIcon::Puzzle => IconName::LayoutDashboard,
    }
}

/// Page list, version selector and launch buttons.
pub fn render(view: &LauncherView, cx: &mut Context<LauncherView>) -> impl IntoElement + use<> {
    let current_page = view.model.current_page_index();
    let versions = view.model.versions();

    let pages = view
        .model
        .page_entries()
        .into_iter()
        .enumerate()
        .map(|(row, entry)| {
            let button = Button::new(SharedString::from(format!("page-{}", row)))
                .icon(icon_for(entry.icon))
                .label(entry.title)
                .on_click(cx.listener(move |view, _: &ClickEvent, _, cx| {
                    view.select_page(row, cx);
                }));
            if row == current_page {
                button.primary()
            } else {
                button.ghost()
            }
        })
        .collect::<Vec<_>>();

    let version_buttons = versions
        .versions()
        .iter()
        .enumerate()
        .map(|(index, version)| {
            let button = Button::new(SharedString::from(format!("version-{}", index)))
                .label(*version)
                .on_click(cx.listener(move |view, _: &ClickEvent, _, cx| {
                    view.select_version(index, cx);
                }));
            if index == versions.current_index() {
                button.primary()
            } else {
                button.ghost()
            }
        })
        .collect::<Vec<_>>();

    let launch_buttons = view
        .model
        .launch_buttons()
        .into_iter()
        .enumerate()
        .map(|(i, state)| {
            Button::new(SharedString::from(format!("launch-{}", i)))
                .label(state.label)
                .disabled(!state.enabled)
                .primary()
                .on_click(cx.listener(on_launch_click(state.variant)))
        })
        .collect::<Vec<_>>();

    div()
        .flex()
        .flex_col()
        .justify_between()
        .w(px(220.))
        .h_full()
        .p_3()
        .gap_3()
        .bg(rgb(0x141418))
        .child(div().flex().flex_col().gap_1().children(pages))
        .child(
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(0x888888))
                        .child("Version"),
                )
                .child(div().flex().flex_wrap().gap_1().children(version_buttons))
                .children(launch_buttons),
        )
}
