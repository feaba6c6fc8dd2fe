//! Test doubles for the converter's platform capabilities

use super::object_url::ObjectUrlStore;
use super::platform::{DownloadSink, FileChooser, ImageCodec, NativeCodec, Platform};
use super::template::Template;
use super::ImageConverter;
use crate::registry::WidgetEnv;
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 200, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

pub struct Doubles {
    pub chooser: Arc<StubChooser>,
    pub codec: Arc<CountingCodec>,
    pub sink: Arc<RecordingSink>,
    pub urls: ObjectUrlStore,
}

pub fn env(runtime: tokio::runtime::Handle) -> (WidgetEnv, Doubles) {
    let doubles = Doubles {
        chooser: Arc::new(StubChooser::default()),
        codec: Arc::new(CountingCodec::default()),
        sink: Arc::new(RecordingSink::default()),
        urls: ObjectUrlStore::new(),
    };
    let platform = Platform {
        chooser: doubles.chooser.clone(),
        codec: doubles.codec.clone(),
        downloads: doubles.sink.clone(),
        object_urls: doubles.urls.clone(),
        runtime,
    };
    let env = WidgetEnv {
        platform,
        template: Template::default(),
    };
    (env, doubles)
}

/// Poll until the in-flight conversion has been picked up.
pub fn wait_for_conversion(widget: &mut ImageConverter) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while widget.pending.is_some() {
        assert!(Instant::now() < deadline, "conversion did not finish");
        widget.poll_conversion();
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[derive(Default)]
pub struct StubChooser {
    paths: Mutex<Vec<PathBuf>>,
}

impl StubChooser {
    pub fn set(&self, paths: Vec<PathBuf>) {
        *self.paths.lock().unwrap() = paths;
    }
}

impl FileChooser for StubChooser {
    fn choose(&self) -> Vec<PathBuf> {
        self.paths.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct GateState {
    held: Mutex<bool>,
    cond: Condvar,
}

/// Releases held decodes when dropped, so a failing test never hangs the runtime
pub struct Gate(Arc<GateState>);

impl Gate {
    pub fn release(&self) {
        *self.0.held.lock().unwrap() = false;
        self.0.cond.notify_all();
    }
}

impl Drop for Gate {
    fn drop(&mut self) {
        self.release();
    }
}

/// Native codec that counts decodes and can be told to stall or to fail encoding
#[derive(Default)]
pub struct CountingCodec {
    decodes: AtomicUsize,
    fail_encoding: AtomicBool,
    gate: Arc<GateState>,
}

impl CountingCodec {
    pub fn decodes(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    pub fn fail_encoding(&self, fail: bool) {
        self.fail_encoding.store(fail, Ordering::SeqCst);
    }

    pub fn hold_decoding(&self) -> Gate {
        *self.gate.held.lock().unwrap() = true;
        Gate(self.gate.clone())
    }
}

impl ImageCodec for CountingCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        let mut held = self.gate.held.lock().unwrap();
        while *held {
            held = self.gate.cond.wait(held).unwrap();
        }
        drop(held);
        NativeCodec.decode(bytes)
    }

    fn encode_webp(&self, surface: &RgbaImage, quality: f32) -> Option<Vec<u8>> {
        if self.fail_encoding.load(Ordering::SeqCst) {
            return None;
        }
        NativeCodec.encode_webp(surface, quality)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
    fail_next: AtomicBool,
}

impl RecordingSink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl DownloadSink for RecordingSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<Option<PathBuf>> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_owned(), bytes.to_vec()));
        Ok(Some(PathBuf::from("/downloads").join(file_name)))
    }
}
