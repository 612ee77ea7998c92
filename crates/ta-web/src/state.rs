//! Application state shared through Leptos context

use crate::platform::{BrowserStorage, WebRuntime};
use leptos::*;
use std::rc::Rc;
use std::time::Duration;
use ta_core::{
    AppConfig, Notice, NoticeVariant, SessionStore, UploadRequest, UploadService, UploadedFile,
    User,
};
use tracing::error;

pub type Session = SessionStore<BrowserStorage, WebRuntime>;
pub type Uploads = UploadService<BrowserStorage, WebRuntime>;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Mirrors core state into signals so views re-render on change
#[derive(Clone)]
pub struct AppState {
    pub session: Rc<Session>,
    pub uploads: Option<Uploads>,
    pub user: RwSignal<Option<User>>,
    pub files: RwSignal<Vec<UploadedFile>>,
    pub toaster: Toaster,
}

impl AppState {
    pub fn init() -> Self {
        let store = BrowserStorage::open();
        let config = AppConfig::default();

        let session = Rc::new(SessionStore::new(store.clone(), WebRuntime, config.clone()));
        let user = create_rw_signal(match session.init() {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to restore session: {}", e);
                None
            }
        });

        let uploads = match UploadService::open(store, WebRuntime, config) {
            Ok(uploads) => Some(uploads),
            Err(e) => {
                error!("Upload service unavailable: {}", e);
                None
            }
        };

        let state = Self {
            session,
            files: create_rw_signal(
                uploads.as_ref().map(|u| u.files()).unwrap_or_default(),
            ),
            uploads,
            user,
            toaster: Toaster::new(),
        };

        if let Some(uploads) = &state.uploads {
            let files = state.files;
            let toaster = state.toaster;
            uploads.subscribe(move |event, snapshot| {
                files.set(snapshot.to_vec());
                if let Some(notice) = event.notice() {
                    toaster.push(notice);
                }
            });
        }

        state
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn logout(&self) {
        if let Err(e) = self.session.logout() {
            error!("Logout did not clear storage: {}", e);
        }
        self.user.set(None);
    }

    pub fn upload(&self, requests: Vec<UploadRequest>) {
        match &self.uploads {
            // Rejections surface as toasts through the subscription
            Some(uploads) => {
                uploads.enqueue_all(requests);
            }
            None => self.toaster.push(Notice {
                title: "Uploads unavailable".to_string(),
                description: "Reload the page and try again".to_string(),
                variant: NoticeVariant::Destructive,
            }),
        }
    }

    pub fn clear_uploads(&self) {
        if let Some(uploads) = &self.uploads {
            if let Err(e) = uploads.clear() {
                error!("Failed to clear uploads: {}", e);
            }
        }
    }
}

/// Transient notices, each dismissed after a few seconds
#[derive(Clone, Copy)]
pub struct Toaster {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn push(self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, notice }));

        set_timeout(move || self.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
