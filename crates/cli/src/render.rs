//! SVG rendering of packed sheets.

use cutlist::{Sheet, SheetBounds};

/// Parameters for SVG rendering.
#[derive(Debug, Clone)]
pub struct SvgParams {
    /// Pixels per sheet unit.
    pub scale: f64,
    /// Padding around the sheet in pixels.
    pub padding: f64,
    /// Height of the title band in pixels.
    pub title_height: f64,
    /// Fill color for placed parts.
    pub fill_color: String,
    /// Stroke color for part outlines.
    pub stroke_color: String,
    /// Fill color of the sheet itself.
    pub sheet_color: String,
    /// Label font size in pixels.
    pub font_size: f64,
}

impl Default for SvgParams {
    fn default() -> Self {
        Self {
            scale: 8.0,
            padding: 20.0,
            title_height: 30.0,
            fill_color: "#d9b382".to_string(),
            stroke_color: "#5a3e1b".to_string(),
            sheet_color: "#f5f5f5".to_string(),
            font_size: 11.0,
        }
    }
}

/// Renders one sheet with default parameters.
pub fn render_sheet(sheet: &Sheet, bounds: &SheetBounds) -> String {
    render_sheet_with(sheet, bounds, &SvgParams::default())
}

/// Renders one sheet.
///
/// Each placement becomes a rectangle labeled with the part name and its
/// `<width>x<height>`. Sheet coordinates map directly onto SVG coordinates
/// since both grow downward from the top-left corner.
pub fn render_sheet_with(sheet: &Sheet, bounds: &SheetBounds, params: &SvgParams) -> String {
    let scale = params.scale;
    let origin_x = params.padding;
    let origin_y = params.padding + params.title_height;
    let width = bounds.width() * scale + 2.0 * params.padding;
    let height = bounds.height() * scale + 2.0 * params.padding + params.title_height;

    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">
  <rect width="100%" height="100%" fill="white"/>
  <text x="{tx:.2}" y="{ty:.2}" font-family="sans-serif" font-size="16" fill="#333">{title}</text>
  <rect x="{ox:.2}" y="{oy:.2}" width="{sw:.2}" height="{sh:.2}" fill="{sheet}" stroke="black" stroke-width="2"/>
"##,
        w = width,
        h = height,
        tx = params.padding,
        ty = params.padding + params.title_height / 2.0,
        title = escape(&title(sheet)),
        ox = origin_x,
        oy = origin_y,
        sw = bounds.width() * scale,
        sh = bounds.height() * scale,
        sheet = params.sheet_color,
    );

    for placement in &sheet.placements {
        let x = origin_x + placement.x * scale;
        let y = origin_y + placement.y * scale;
        let w = placement.width() * scale;
        let h = placement.height() * scale;
        let cx = x + w / 2.0;
        let cy = y + h / 2.0;

        svg.push_str(&format!(
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="1"/>
  <text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle">
    <tspan x="{:.2}" dy="-0.2em">{}</tspan>
    <tspan x="{:.2}" dy="1.2em">{}x{}</tspan>
  </text>
"#,
            x,
            y,
            w,
            h,
            params.fill_color,
            params.stroke_color,
            cx,
            cy,
            params.font_size,
            cx,
            escape(placement.unit.name()),
            cx,
            placement.width(),
            placement.height(),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn title(sheet: &Sheet) -> String {
    format!(
        "Thickness {} - Sheet {} ({})",
        sheet.thickness, sheet.index, sheet.strategy
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
