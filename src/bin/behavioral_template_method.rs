//! Behavioral pattern: Template Method
//! Example: file-content display skeleton with format-specific steps
//!
//! The `display` default method fixes the read -> decode -> render order;
//! implementations fill in only the steps. All I/O here is mocked, the point
//! is the shape of the algorithm.
//!
//! Run with: cargo run --bin behavioral_template_method

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum DisplayError {
    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(String),
    #[error("could not decode content")]
    Decode,
}

trait ContentDisplay: std::fmt::Debug {
    fn read_data(&mut self, buffer: &mut [u8]) -> usize;
    fn decode(&mut self, data: &[u8]) -> Result<bool, DisplayError>;
    fn render(&self);

    /// The template method. Steps vary per format, the skeleton does not.
    fn display(&mut self) -> Result<(), DisplayError> {
        let mut buffer = [0u8; 256];
        let read = self.read_data(&mut buffer);
        if self.decode(&buffer[..read])? {
            self.render();
        }
        Ok(())
    }
}

#[derive(Debug)]
struct JpegDisplay;

impl ContentDisplay for JpegDisplay {
    fn read_data(&mut self, _buffer: &mut [u8]) -> usize {
        println!("Read N bytes from the file system into the buffer..");
        10
    }

    fn decode(&mut self, data: &[u8]) -> Result<bool, DisplayError> {
        if data.is_empty() {
            return Err(DisplayError::Decode);
        }
        println!("Decoding JPEG bytes into color blocks..");
        Ok(true)
    }

    fn render(&self) {
        println!("Pretty JPEG image, or not\n");
    }
}

#[derive(Debug)]
struct SvgDisplay;

impl ContentDisplay for SvgDisplay {
    fn read_data(&mut self, _buffer: &mut [u8]) -> usize {
        println!("Read N bytes from a TCP socket into the buffer..");
        51
    }

    fn decode(&mut self, data: &[u8]) -> Result<bool, DisplayError> {
        if data.is_empty() {
            return Err(DisplayError::Decode);
        }
        println!("Decoding SVG bytes into table entries..");
        Ok(true)
    }

    fn render(&self) {
        println!("|Some|Table|With|Valuable|Data|\n");
    }
}

fn display_for(file: &str) -> Result<Box<dyn ContentDisplay>, DisplayError> {
    let extension = Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "jpeg" | "jpg" => Ok(Box::new(JpegDisplay)),
        "svg" => Ok(Box::new(SvgDisplay)),
        other => Err(DisplayError::UnsupportedExtension(other.to_string())),
    }
}

fn main() -> Result<(), DisplayError> {
    for file in ["Kitties.jpeg", "ValuableData.svg"] {
        let mut display = display_for(file)?;
        display.display()?;
    }
    Ok(())
}
