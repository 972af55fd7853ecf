//! Structural pattern: Proxy
//! Example: an image that is loaded from storage only when first drawn
//!
//! Run with: cargo run --bin structural_proxy

use std::cell::{Cell, OnceCell};

trait Image {
    fn draw(&self, width: u32, height: u32) -> String;
}

/// The expensive subject. Loading is mocked, the cost is the point.
struct StoredImage {
    path: String,
    pixels: usize,
}

impl StoredImage {
    fn load(path: &str) -> Self {
        println!("Loading {path} from storage..");
        StoredImage {
            path: path.to_string(),
            pixels: 1024 * 768,
        }
    }
}

impl Image for StoredImage {
    fn draw(&self, width: u32, height: u32) -> String {
        format!("{} ({} px) drawn at {width}x{height}", self.path, self.pixels)
    }
}

/// Stands in for the image until somebody actually draws it.
struct ImageProxy {
    path: String,
    image: OnceCell<StoredImage>,
    loads: Cell<u32>,
}

impl ImageProxy {
    fn new(path: &str) -> Self {
        ImageProxy {
            path: path.to_string(),
            image: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    fn times_loaded(&self) -> u32 {
        self.loads.get()
    }
}

impl Image for ImageProxy {
    fn draw(&self, width: u32, height: u32) -> String {
        let image = self.image.get_or_init(|| {
            self.loads.set(self.loads.get() + 1);
            StoredImage::load(&self.path)
        });
        image.draw(width, height)
    }
}

fn main() {
    let proxy = ImageProxy::new("kitties.jpeg");
    println!("Proxy created, nothing loaded yet ({} loads)", proxy.times_loaded());

    println!("{}", proxy.draw(640, 480));
    println!("{}", proxy.draw(1920, 1080));
    println!("Loads after two draws: {}", proxy.times_loaded());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_the_proxy_loads_nothing() {
        let proxy = ImageProxy::new("a.jpeg");
        assert_eq!(proxy.times_loaded(), 0);
    }

    #[test]
    fn repeated_draws_load_once() {
        let proxy = ImageProxy::new("a.jpeg");
        proxy.draw(10, 10);
        proxy.draw(20, 20);
        assert_eq!(proxy.times_loaded(), 1);
    }

    #[test]
    fn proxy_draws_like_the_real_image() {
        let proxy = ImageProxy::new("a.jpeg");
        let direct = StoredImage::load("a.jpeg");
        assert_eq!(proxy.draw(10, 10), direct.draw(10, 10));
    }
}
