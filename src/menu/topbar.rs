use crate::menu::context::MenuContext;
use crate::menu::node::RenderNode;

/// Left side of the top bar: catalogue entry points. Mobile devices do not
/// get the Remote Services entry.
pub fn left_topbar(ctx: &MenuContext) -> Vec<RenderNode> {
    let mut data_items = vec![
        RenderNode::link("/catalogue/#/search/?f=dataset", "Datasets"),
        RenderNode::link("/catalogue/#/search/?f=document", "Documents"),
    ];
    if !ctx.is_mobile {
        data_items.push(RenderNode::link("/services/?limit=5", "Remote Services"));
    }

    vec![
        RenderNode::link("/catalogue/#", "Catalogue"),
        RenderNode::dropdown("Data", data_items),
        RenderNode::link("/catalogue/#/search/?f=map", "Maps"),
        RenderNode::link("/catalogue/#/search/?f=geostory", "GeoStories"),
        RenderNode::link("/catalogue/#/search/?f=dashboard", "Dashboards"),
        RenderNode::link("/catalogue/#/search/?f=featured", "Featured"),
    ]
}

/// Right side of the top bar: fixed help links, same for every caller.
pub fn right_topbar() -> Vec<RenderNode> {
    vec![
        RenderNode::link("/", "Home"),
        RenderNode::external_link(
            "https://raw.githubusercontent.com/GISTDAsphere/sphere-portal-tutorial/main/sphere-portal-tutorial.pdf",
            "Tutorial",
        ),
        RenderNode::external_link(
            "https://www.youtube.com/playlist?list=PLysNI2uEMzi8db9nvODptoNjgC9cEU6lu",
            "Video Tutorial",
        ),
    ]
}
