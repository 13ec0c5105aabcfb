//! Renders one showcase overlay over a synthetic screen and saves it as PNG.
//!
//! Stands in for the host UI toolkit: paints a fake app screen, composites
//! the mask at the frame's overlay alpha, outlines the label rectangles
//! (text rendering stays with a real host) and reports lifecycle events.

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use image::{Rgba, RgbaImage};
use showcase::{LabelSpec, MemoryFlagStore, Rect, Showcase, ShowcaseFrame, Size};

const SCREEN: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn main() -> Result<()> {
    let target = Rect::new(700.0, 50.0, 60.0, 30.0);

    let mut sc = Showcase::new(LabelSpec::new(
        "Share",
        "Tap the button in the corner to share this screen",
    ));
    sc.single_shot = Some(1);

    let (tx, rx) = bounded(4);
    sc.set_event_channel(tx);

    let mut store = MemoryFlagStore::new();
    let frame = sc
        .present(
            SCREEN,
            target,
            Size::new(120.0, 28.0),
            Size::new(420.0, 20.0),
            &store,
        )?
        .context("suppressed by single-shot flag")?;

    let composited = composite(&fake_screen(), &frame);
    composited.save("showcase.png")?;

    sc.dismiss(&mut store)?;
    for event in rx.try_iter() {
        println!("{event:?}");
    }
    println!(
        "region: {:?}, title at {:?}, wrote showcase.png",
        frame.region, frame.placement.title
    );

    Ok(())
}

/// A stand-in app screen: light background with a filled "button" at the target
fn fake_screen() -> RgbaImage {
    let mut screen = RgbaImage::from_pixel(
        SCREEN.width as u32,
        SCREEN.height as u32,
        Rgba([235, 235, 240, 255]),
    );
    fill_rect(&mut screen, Rect::new(700.0, 50.0, 60.0, 30.0), [70, 130, 200]);
    screen
}

/// Layer the overlay mask over the background at the frame's opacity and
/// outline the two label rectangles
fn composite(background: &RgbaImage, frame: &ShowcaseFrame) -> RgbaImage {
    let mut out = background.clone();

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let mask = frame.mask.get_pixel(x, y).0;
        let weight = frame.overlay_alpha * mask[3] as f32 / 255.0;
        for c in 0..3 {
            let blended = pixel.0[c] as f32 * (1.0 - weight) + mask[c] as f32 * weight;
            pixel.0[c] = blended.round() as u8;
        }
    }

    outline_rect(&mut out, frame.placement.title, [255, 255, 255]);
    outline_rect(&mut out, frame.placement.details, [255, 255, 255]);
    out
}

fn fill_rect(img: &mut RgbaImage, rect: Rect, rgb: [u8; 3]) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if rect.contains(x as f32 + 0.5, y as f32 + 0.5) {
            *pixel = Rgba([rgb[0], rgb[1], rgb[2], 255]);
        }
    }
}

fn outline_rect(img: &mut RgbaImage, rect: Rect, rgb: [u8; 3]) {
    if rect.width == 0.0 || rect.height == 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    let x0 = rect.x.max(0.0) as u32;
    let y0 = rect.y.max(0.0) as u32;
    let x1 = (rect.right().min(w as f32 - 1.0)) as u32;
    let y1 = (rect.bottom().min(h as f32 - 1.0)) as u32;

    for x in x0..=x1 {
        img.put_pixel(x, y0, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        img.put_pixel(x, y1, Rgba([rgb[0], rgb[1], rgb[2], 255]));
    }
    for y in y0..=y1 {
        img.put_pixel(x0, y, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        img.put_pixel(x1, y, Rgba([rgb[0], rgb[1], rgb[2], 255]));
    }
}
