use crate::config::PortalConfig;
use crate::menu::context::{flags, MenuContext, PortalUser};
use crate::menu::node::{DropdownNode, RenderNode};

/// CSS class the front-end widget uses to style the user-menu dropdown.
const USER_MENU_CLASS: &str = "gn-user-menu-dropdown";

/// Build the user menu for the caller's context.
///
/// Anonymous callers get the sign-in entries; signed-in callers get a single
/// profile dropdown whose tail depends on device class, superuser role and
/// the monitoring flag.
pub fn user_menu(ctx: &MenuContext, portal: &PortalConfig) -> Vec<RenderNode> {
    let Some(user) = &ctx.user else {
        return anonymous_menu(ctx);
    };

    let profile_link = RenderNode::link(user.profile_url(), "Profile");
    let logout = RenderNode::link("/account/logout/?next=/", "Log out");

    if ctx.is_mobile {
        let items = vec![profile_link, RenderNode::divider(), logout];
        return vec![profile_dropdown(user, ctx.is_superuser, items)];
    }

    let mut items = vec![
        profile_link,
        RenderNode::external_link(portal.web_url("dashboard"), "sphere Dashboard"),
        RenderNode::external_link(portal.web_url("storage"), "Storage"),
        RenderNode::divider(),
    ];

    if ctx.is_superuser {
        items.extend(admin_entries(portal));
        if ctx.has_flag(flags::MONITORING) {
            items.push(RenderNode::divider());
            items.push(RenderNode::link("/monitoring/", "Monitoring & Analytics"));
        }
        items.push(RenderNode::divider());
    }
    items.push(logout);

    vec![profile_dropdown(user, ctx.is_superuser, items)]
}

fn anonymous_menu(ctx: &MenuContext) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    if ctx.has_flag(flags::OPEN_SIGNUP) && !ctx.has_flag(flags::READ_ONLY) {
        nodes.push(RenderNode::link("/account/signup/?next=/", "Register"));
    }
    nodes.push(RenderNode::link("/account/login/?next=/", "Sign in"));
    nodes
}

fn profile_dropdown(user: &PortalUser, superuser: bool, items: Vec<RenderNode>) -> RenderNode {
    RenderNode::Dropdown(DropdownNode {
        label: None,
        items,
        image: Some(user.avatar_url.clone()),
        firstname: Some(user.first_name.clone()),
        name: Some(user.username.clone()),
        superuser: Some(superuser),
        class_name: Some(USER_MENU_CLASS.to_string()),
    })
}

/// Administration entries shown to superusers, all opening in a new tab.
fn admin_entries(portal: &PortalConfig) -> Vec<RenderNode> {
    vec![
        RenderNode::external_link("/admin/", "Admin Page"),
        RenderNode::external_link("/admin/auth/group/", "Manage portal Groups"),
        RenderNode::external_link(
            portal.web_url("admin-settings/general"),
            "Manage portal Group Permissions",
        ),
        RenderNode::external_link(portal.web_url("admin-user"), "Manage Users"),
        RenderNode::external_link(
            "/keycloaksync/synchronize_all",
            "Synchronize portal Groups & Users",
        ),
        RenderNode::external_link("/geoserver/", "GeoServer"),
    ]
}
