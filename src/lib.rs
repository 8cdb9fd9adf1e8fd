//! A crate for turning a favicon PNG into a multi-size ICO file.
//! The source image is flattened onto an opaque background (white by
//! default) and resized to each of the requested icon sizes.
//!
//! ## Examples
//! ### Basic
//! In this example, `favicon.png` is composited over white and saved as
//! an ICO containing 16px, 32px, 48px, and 64px frames.
//!
//! ```no_run
//! # use favicon_ico::FaviconBuilder;
//! FaviconBuilder::default()
//!     .source_file("public/favicon.png")
//!     .build_file("public/favicon.ico");
//! ```
//!
//! ### Custom Icon Sizes
//! If you want more fine grained control over which icon sizes are included,
//! you can specify a custom list of icon sizes.
//!
//! ```no_run
//! # use favicon_ico::FaviconBuilder;
//! FaviconBuilder::default()
//!     .sizes(&[16, 32])
//!     .source_file("public/favicon.png")
//!     .build_file("public/favicon.ico");
//! ```

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{overlay, resize, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, Rgba, RgbaImage};
use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::Cursor;
use std::path::{Path, PathBuf};

mod error;
pub use error::{Error, Result};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Builds an ICO file from a single source image.
/// The source is alpha-composited over an opaque background, then scaled
/// to each requested size.
#[derive(Debug)]
pub struct FaviconBuilder {
    sizes: IconSizes,
    background: Rgba<u8>,
    source_file: Option<PathBuf>,
}

impl Default for FaviconBuilder {
    fn default() -> Self {
        FaviconBuilder {
            sizes: IconSizes::default(),
            background: WHITE,
            source_file: None,
        }
    }
}

impl FaviconBuilder {
    /// Customizes the sizes included in the ICO file. Defaults to [`IconSizes::FAVICON`].
    pub fn sizes(&mut self, sizes: impl Into<IconSizes>) -> &mut FaviconBuilder {
        self.sizes = sizes.into();
        self
    }

    /// Customizes the opaque background color the source is flattened onto.
    /// Defaults to white.
    pub fn background(&mut self, r: u8, g: u8, b: u8) -> &mut FaviconBuilder {
        self.background = Rgba([r, g, b, 255]);
        self
    }

    /// Sets the source file. The file can be PNG, BMP or any other format
    /// supported by the [`image`] crate.
    ///
    /// Note that you'll have to enable the necessary features on the [`image`] crate if you want
    /// to use formats other than PNG or BMP:
    /// ```toml
    /// # ...
    ///
    /// [dependencies]
    /// favicon-ico = { version = "...", features = ["jpeg"] }
    /// ```
    pub fn source_file(&mut self, source_file: impl AsRef<Path>) -> &mut FaviconBuilder {
        self.source_file = Some(source_file.as_ref().to_owned());
        self
    }

    /// Builds the ICO file and writes it to the specified `output_file_path`,
    /// truncating any existing file there.
    pub fn build_file(&self, output_file_path: impl AsRef<Path>) -> Result<()> {
        let source_file = self.source_file.as_deref().ok_or(Error::MissingSource)?;
        let flattened = flatten_onto_background(source_file, self.background)?;

        let frames: Vec<_> = self
            .sizes
            .0
            .iter()
            .copied()
            .map(|size| create_ico_frame(&flattened, size))
            .collect::<Result<_>>()?;

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&output_file_path)?;
        IcoEncoder::new(file).encode_images(&frames)?;

        Ok(())
    }

    /// Builds the ICO file and writes it to `OUT_DIR`. Fails with
    /// [`Error::MissingOutDir`] when called outside of a build script.
    pub fn build_file_cargo(&self, file_name: impl AsRef<OsStr>) -> Result<PathBuf> {
        let out_dir = env::var("OUT_DIR").map_err(|_| Error::MissingOutDir)?;
        let mut output_path = PathBuf::from(out_dir);
        output_path.push(file_name.as_ref());

        self.build_file(&output_path)?;

        Ok(output_path)
    }
}

/// A list of icon sizes.
#[derive(Debug)]
pub struct IconSizes(Cow<'static, [u32]>);

impl IconSizes {
    /// The sizes browsers commonly pick a favicon from: 16x16, 32x32, 48x48, and 64x64.
    pub const FAVICON: Self = Self::new(&[16, 32, 48, 64]);

    pub const fn new(sizes: &'static [u32]) -> IconSizes {
        Self(Cow::Borrowed(sizes))
    }
}

impl Default for IconSizes {
    fn default() -> Self {
        IconSizes::FAVICON
    }
}

impl<'a, I> From<I> for IconSizes
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(value: I) -> Self {
        IconSizes(value.into_iter().copied().collect::<Vec<_>>().into())
    }
}

/// Decodes the source, adds an opaque alpha channel if it has none, and
/// composites it over a canvas of the background color. Fully transparent
/// source pixels come out as the background color, fully opaque pixels keep
/// their color, and partial alpha blends linearly between the two.
fn flatten_onto_background(source_file: &Path, background: Rgba<u8>) -> Result<RgbaImage> {
    let source = ImageReader::open(source_file)?.decode()?.to_rgba8();
    let mut canvas = RgbaImage::from_pixel(source.width(), source.height(), background);
    overlay(&mut canvas, &source, 0, 0);
    Ok(canvas)
}

fn create_ico_frame(flattened: &RgbaImage, size: u32) -> Result<IcoFrame<'static>> {
    let resized = resize(flattened, size, size, FilterType::Lanczos3);
    encode_ico_frame(resized.as_raw(), size)
}

fn encode_ico_frame(buf: &[u8], size: u32) -> Result<IcoFrame<'static>> {
    let color_type = ExtendedColorType::Rgba8;
    let mut encoded = Vec::new();
    PngEncoder::new(Cursor::new(&mut encoded)).write_image(buf, size, size, color_type)?;
    Ok(IcoFrame::with_encoded(encoded, size, size, color_type)?)
}
