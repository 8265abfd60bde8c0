use std::rc::Rc;

use web_sys::window;

/// Session-storage key marking that the quote popup was already presented.
const SEEN_KEY: &str = "homesphere_quote_prompted";

/// One boolean flag with session lifetime. Injected into the popup instead
/// of read as an ambient global so the display policy is testable without a
/// browser.
pub trait FlagStore {
    fn is_set(&self) -> bool;
    fn mark(&self);
}

/// Browser-backed store. Degrades to "never seen" when sessionStorage is
/// unavailable (private-mode quirks), which at worst re-shows the popup.
#[derive(Default)]
pub struct SessionFlags;

impl SessionFlags {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl FlagStore for SessionFlags {
    fn is_set(&self) -> bool {
        Self::storage()
            .and_then(|s| s.get_item(SEEN_KEY).ok().flatten())
            .is_some()
    }

    fn mark(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SEEN_KEY, "1");
        }
    }
}

/// Cheap-to-clone handle so the store can travel through component props.
/// Equality is identity; the app creates exactly one per session.
#[derive(Clone)]
pub struct SharedFlags(Rc<dyn FlagStore>);

impl SharedFlags {
    pub fn session() -> Self {
        SharedFlags(Rc::new(SessionFlags))
    }

    pub fn new(store: Rc<dyn FlagStore>) -> Self {
        SharedFlags(store)
    }
}

impl std::ops::Deref for SharedFlags {
    type Target = dyn FlagStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl std::fmt::Debug for SharedFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedFlags")
    }
}

impl PartialEq for SharedFlags {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The popup auto-shows once per session; an explicit trigger still works
/// after that, with a fresh wizard each time.
pub fn should_auto_show(flags: &dyn FlagStore) -> bool {
    !flags.is_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryFlags {
        seen: Cell<bool>,
    }

    impl FlagStore for MemoryFlags {
        fn is_set(&self) -> bool {
            self.seen.get()
        }

        fn mark(&self) {
            self.seen.set(true);
        }
    }

    #[test]
    fn auto_show_until_marked() {
        let flags = MemoryFlags::default();
        assert!(should_auto_show(&flags));
        flags.mark();
        assert!(!should_auto_show(&flags));
    }

    #[test]
    fn dismissal_counts_as_seen() {
        // Closing without submitting still suppresses the auto-show.
        let flags = MemoryFlags::default();
        flags.mark();
        flags.mark();
        assert!(flags.is_set());
        assert!(!should_auto_show(&flags));
    }

    #[test]
    fn shared_handle_reaches_one_store() {
        let flags = SharedFlags::new(Rc::new(MemoryFlags::default()));
        let other = flags.clone();
        other.mark();
        assert!(flags.is_set());
        assert_eq!(flags, other);
    }
}
