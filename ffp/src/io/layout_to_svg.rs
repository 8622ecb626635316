use crate::io::svg_util::SvgDrawOptions;
use freerects::Cell;
use freerects::entities::LayoutSnapshot;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Renders a layout snapshot to an SVG document.
///
/// The core's y axis points up while SVG's points down; the flip happens
/// here, on the rendering side of the boundary.
pub fn s_layout_to_svg(
    s_layout: &LayoutSnapshot,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let canvas = s_layout.canvas;
    let theme = options.theme.get_theme();
    let cell = options.cell_size;

    let c_width = canvas.width as f32 * cell;
    let c_height = canvas.height as f32 * cell;
    let stroke_width = cell * 0.05 * theme.stroke_width_multiplier;
    let margin = cell;

    // svg y coordinate of a rect's top edge
    let flip_y = |y_max: Cell| (canvas.height - y_max) as f32 * cell;

    let label = {
        //print some information above the left top of the canvas
        let label_content = format!(
            "canvas: {}x{} | density: {:.3}% | {}",
            canvas.width,
            canvas.height,
            s_layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.3 * margin)
            .set("font-size", 0.6 * cell)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw canvas
    let canvas_group = Group::new()
        .set("id", "canvas")
        .add(Title::new(format!(
            "canvas, {}x{} cells",
            canvas.width, canvas.height
        )))
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", c_width)
                .set("height", c_height)
                .set("fill", theme.canvas_fill)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        );

    let mut doc = Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                c_width + 2.0 * margin,
                c_height + 2.0 * margin,
            ),
        )
        .add(label)
        .add(canvas_group);

    //draw placed items
    for pi in s_layout.placed_items.values() {
        let rect = pi.rect;
        let fill = theme.item_fills[pi.item_id % theme.item_fills.len()];
        let mut group = Group::new()
            .set("id", format!("item_{}", pi.item_id))
            .add(Title::new(format!(
                "item, id: {}, origin: ({}, {}), size: {}x{}",
                pi.item_id,
                rect.x_min,
                rect.y_min,
                rect.width(),
                rect.height()
            )))
            .add(
                Rectangle::new()
                    .set("x", rect.x_min as f32 * cell)
                    .set("y", flip_y(rect.y_max))
                    .set("width", rect.width() as f32 * cell)
                    .set("height", rect.height() as f32 * cell)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width),
            );
        if options.label_items {
            group = group.add(
                Text::new(format!("{}", pi.item_id))
                    .set("x", (rect.x_min as f32 + rect.width() as f32 / 2.0) * cell)
                    .set("y", flip_y(rect.y_max) + rect.height() as f32 / 2.0 * cell)
                    .set("font-size", 0.6 * cell)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            );
        }
        doc = doc.add(group);
    }

    //draw the remaining free rectangles
    if options.draw_free_rects {
        for (i, fr) in s_layout.free_rects.iter().enumerate() {
            doc = doc.add(
                Group::new()
                    .set("id", format!("free_rect_{i}"))
                    .add(Title::new(format!(
                        "free rect, origin: ({}, {}), size: {}x{}",
                        fr.x_min,
                        fr.y_min,
                        fr.width(),
                        fr.height()
                    )))
                    .add(
                        Rectangle::new()
                            .set("x", fr.x_min as f32 * cell)
                            .set("y", flip_y(fr.y_max))
                            .set("width", fr.width() as f32 * cell)
                            .set("height", fr.height() as f32 * cell)
                            .set("fill", "none")
                            .set("stroke", theme.free_rect_stroke)
                            .set("stroke-opacity", theme.free_rect_opacity)
                            .set("stroke-width", 0.5 * stroke_width)
                            .set(
                                "stroke-dasharray",
                                format!("{} {}", stroke_width, 2.0 * stroke_width),
                            )
                            .set("stroke-linecap", "round"),
                    ),
            );
        }
    }

    doc
}
