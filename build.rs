//! Embeds the leaf sprite as the Windows executable icon, so the exe icon
//! matches the window icon set at runtime.

const LEAF_SPRITE: &str = "Assets/Hojaoto.png";

fn main() {
    println!("cargo:rerun-if-changed={LEAF_SPRITE}");
    #[cfg(windows)]
    if let Err(e) = embed_leaf_icon() {
        println!("cargo:warning=icon not embedded: {e}");
    }
}

#[cfg(windows)]
fn embed_leaf_icon() -> Result<(), Box<dyn std::error::Error>> {
    use image::imageops::{self, FilterType};

    let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let sprite = image::open(manifest_dir.join(LEAF_SPRITE))?.to_rgba8();

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in [16, 32, 48, 256] {
        let scaled = imageops::resize(&sprite, size, size, FilterType::Triangle);
        let entry = ico::IconDirEntry::encode(&ico::IconImage::from_rgba_data(size, size, scaled.into_raw()))?;
        icon_dir.add_entry(entry);
    }

    let icon_path = std::path::PathBuf::from(std::env::var("OUT_DIR")?).join("leaf.ico");
    icon_dir.write(std::fs::File::create(&icon_path)?)?;

    let mut res = winres::WindowsResource::new();
    res.set_icon(&icon_path.to_string_lossy());
    res.compile()?;
    Ok(())
}
