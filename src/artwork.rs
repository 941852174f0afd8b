use anyhow::Result;
use image::DynamicImage;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use reqwest::Client;

pub struct ArtworkRenderer {
    client: Client,
}

impl ArtworkRenderer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let img = image::load_from_memory(&bytes)?;
        Ok(img)
    }

    /// Draw `img` into `width` x `height` cells with upper half blocks
    /// (fg = top pixel, bg = bottom pixel), keeping its aspect ratio and
    /// centering it vertically.
    pub fn render_half_blocks(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'static>> {
        use image::imageops::FilterType;
        use image::GenericImageView;

        if width == 0 || height == 0 {
            return Vec::new();
        }

        let resized = img.resize(width as u32, height as u32 * 2, FilterType::Triangle);
        let px_height = resized.height();
        let rows = px_height.div_ceil(2);
        let padding_top = (height as u32).saturating_sub(rows) / 2;

        let mut lines: Vec<Line<'static>> = (0..padding_top).map(|_| Line::default()).collect();

        for y in (0..px_height).step_by(2) {
            let spans: Vec<Span<'static>> = (0..resized.width())
                .map(|x| {
                    let top = resized.get_pixel(x, y);
                    let bottom = if y + 1 < px_height {
                        resized.get_pixel(x, y + 1)
                    } else {
                        top
                    };
                    Span::styled(
                        "▀",
                        Style::default()
                            .fg(Color::Rgb(top[0], top[1], top[2]))
                            .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines
    }
}
