//! Browser implementations of the core's storage and timer seams

use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use leptos::leptos_dom::helpers::TimeoutHandle;
use std::time::Duration;
use ta_core::storage::storage_error;
use ta_core::{CoreError, CoreResult, KeyValueStore, MemoryStore, Runtime};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// `localStorage`, or an in-memory map when the browser refuses it
#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match leptos::window().local_storage() {
            Ok(Some(storage)) => BrowserStorage::Local(storage),
            Ok(None) => {
                warn!("localStorage is not available, state will not survive a reload");
                BrowserStorage::Memory(MemoryStore::new())
            }
            Err(e) => {
                warn!("localStorage refused: {:?}", e);
                BrowserStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage
                .get_item(key)
                .map_err(|e| storage_error("localStorage.getItem", format!("{:?}", e))),
            BrowserStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| storage_error("localStorage.setItem", format!("{:?}", e))),
            BrowserStorage::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| storage_error("localStorage.removeItem", format!("{:?}", e))),
            BrowserStorage::Memory(store) => store.remove(key),
        }
    }
}

/// `spawn_local` plus `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebRuntime;

struct ClearOnDrop(TimeoutHandle);

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        self.0.clear();
    }
}

impl Runtime for WebRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel::<()>();
        match leptos::set_timeout_with_handle(
            move || {
                let _ = tx.send(());
            },
            duration,
        ) {
            Ok(handle) => async move {
                let _timer = ClearOnDrop(handle);
                let _ = rx.await;
            }
            .boxed_local(),
            Err(e) => {
                warn!("setTimeout failed: {:?}", e);
                future::ready(()).boxed_local()
            }
        }
    }
}

/// Read the whole file through `Blob.arrayBuffer()`
pub async fn read_file(file: web_sys::File) -> CoreResult<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| CoreError::FileRead(format!("{}: {:?}", file.name(), e)))?;
    let buffer: js_sys::ArrayBuffer = buffer
        .dyn_into()
        .map_err(|_| CoreError::FileRead(format!("{}: not an ArrayBuffer", file.name())))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
