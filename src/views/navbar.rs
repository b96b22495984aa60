// ============================================================================
// NAVBAR VIEW - Header, enlaces, menú de cuenta y overlay móvil
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::UserMenuAction;
use crate::state::AppState;
use crate::utils::constants::{CROSS_ICON, DROPDOWN_ICON, LOGO_IMAGE, MENU_ICON};
use crate::utils::router::{navigate, Route};
use crate::viewmodels::{run_menu_action, AccountArea, NavLinkView, NavbarViewModel};

/// Renderizar la barra de navegación
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    let vm = NavbarViewModel::new(&state.store, &route, *state.show_mobile_menu.borrow());

    let logo = ElementBuilder::new("button")?
        .class("navbar-logo")
        .attr("aria-label", "Home")?
        .child(
            ElementBuilder::new("img")?
                .attr("src", LOGO_IMAGE)?
                .attr("alt", "Logo")?
                .build(),
        )?
        .on_click(|_| navigate(&Route::Home))?
        .build();

    let desktop_nav = ElementBuilder::new("nav")?
        .class("navbar-links")
        .child(render_link_list(state, &vm.links, "navbar-link-list", false)?)?
        .build();

    let account = match &vm.account {
        AccountArea::Menu { avatar, name } => render_account_menu(state, &vm, avatar, name)?,
        AccountArea::CreateAccount => ElementBuilder::new("button")?
            .class("btn-create-account")
            .text("Create account")
            .on_click(|_| navigate(&Route::Login))?
            .build(),
    };

    let open_menu = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-open-menu")
            .attr("aria-label", "Open menu")?
            .child(
                ElementBuilder::new("img")?
                    .attr("src", MENU_ICON)?
                    .attr("alt", "Menu")?
                    .build(),
            )?
            .on_click(move |_| state.set_show_mobile_menu(true))?
            .build()
    };

    let actions = ElementBuilder::new("div")?
        .class("navbar-actions")
        .child(account)?
        .child(open_menu)?
        .child(render_mobile_menu(state, &vm)?)?
        .build();

    let header = ElementBuilder::new("header")?
        .class("navbar")
        .child(logo)?
        .child(desktop_nav)?
        .child(actions)?
        .build();

    Ok(header)
}

fn render_link_list(
    state: &AppState,
    links: &[NavLinkView],
    class: &str,
    closes_menu: bool,
) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.class(class).build();

    for view in links {
        let route = Route::parse(view.link.path);
        let mut anchor = ElementBuilder::new("a")?
            .class("nav-link")
            .class_if("active", view.active)?
            .attr("href", &route.href())?
            .text(view.link.label);

        if closes_menu {
            let state = state.clone();
            anchor = anchor.on_click(move |_| state.set_show_mobile_menu(false))?;
        }

        let item = ElementBuilder::new("li")?.child(anchor.build())?.build();
        list.append_child(&item)?;
    }

    Ok(list)
}

fn render_account_menu(
    state: &AppState,
    vm: &NavbarViewModel,
    avatar: &str,
    name: &str,
) -> Result<Element, JsValue> {
    let trigger = ElementBuilder::new("button")?
        .class("account-trigger")
        .attr("aria-label", "User menu")?
        .attr("title", name)?
        .child(
            ElementBuilder::new("img")?
                .class("account-avatar")
                .attr("src", avatar)?
                .attr("alt", "User profile")?
                .build(),
        )?
        .child(
            ElementBuilder::new("img")?
                .class("account-chevron")
                .attr("src", DROPDOWN_ICON)?
                .attr("alt", "")?
                .build(),
        )?
        .build();

    let dropdown = ElementBuilder::new("div")?.class("account-dropdown").build();
    for &action in vm.menu_items() {
        let store = state.store.clone();
        let item = ElementBuilder::new("button")?
            .class("account-dropdown-item")
            .text(action.label())
            .on_click(move |_| {
                if action == UserMenuAction::Logout {
                    log::info!("👋 [NAVBAR] Logout solicitado");
                }
                navigate(&run_menu_action(&store, action));
            })?
            .build();
        dropdown.append_child(&item)?;
    }

    let menu = ElementBuilder::new("div")?
        .class("account-menu")
        .child(trigger)?
        .child(dropdown)?
        .build();

    Ok(menu)
}

fn render_mobile_menu(state: &AppState, vm: &NavbarViewModel) -> Result<Element, JsValue> {
    let close = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-close-menu")
            .attr("aria-label", "Close menu")?
            .child(
                ElementBuilder::new("img")?
                    .attr("src", CROSS_ICON)?
                    .attr("alt", "Close menu")?
                    .build(),
            )?
            .on_click(move |_| state.set_show_mobile_menu(false))?
            .build()
    };

    let top = ElementBuilder::new("div")?
        .class("mobile-menu-header")
        .child(
            ElementBuilder::new("img")?
                .attr("src", LOGO_IMAGE)?
                .attr("alt", "Logo")?
                .build(),
        )?
        .child(close)?
        .build();

    let nav = ElementBuilder::new("nav")?
        .child(render_link_list(state, &vm.links, "mobile-menu-links", true)?)?
        .build();

    let menu = ElementBuilder::new("div")?
        .class("mobile-menu")
        .class_if("open", vm.show_mobile_menu)?
        .attr("aria-hidden", if vm.show_mobile_menu { "false" } else { "true" })?
        .child(top)?
        .child(nav)?
        .build();

    Ok(menu)
}
