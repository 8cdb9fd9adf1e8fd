//! One-shot favicon conversion: composites `public/favicon.png` over a
//! white background and writes `public/favicon.ico` with 16/32/48/64px
//! frames. Failures are printed, not propagated; the process always
//! exits successfully.

use favicon_ico::FaviconBuilder;

const INPUT_PATH: &str = "public/favicon.png";
const OUTPUT_PATH: &str = "public/favicon.ico";

fn main() {
    match FaviconBuilder::default()
        .source_file(INPUT_PATH)
        .build_file(OUTPUT_PATH)
    {
        Ok(()) => {
            println!("Successfully converted {INPUT_PATH} to {OUTPUT_PATH} with WHITE background.")
        }
        Err(e) => println!("Error converting favicon: {e}"),
    }
}
