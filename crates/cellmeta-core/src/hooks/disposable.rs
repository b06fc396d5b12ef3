/// Undoes a registration exactly once, either through [`Disposable::dispose`]
/// or when dropped.
#[must_use = "dropping a Disposable immediately undoes the registration"]
pub struct Disposable {
    teardown: Option<Box<dyn FnOnce() + Send>>,
}

impl Disposable {
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Disposable {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Disposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposable")
            .field("disposed", &self.teardown.is_none())
            .finish()
    }
}

/// Registrations owned by a controller, released together on teardown.
#[derive(Debug, Default)]
pub struct DisposableCollection {
    items: Vec<Disposable>,
}

impl DisposableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, disposable: Disposable) {
        self.items.push(disposable);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Release everything, in reverse registration order.
    pub fn dispose(&mut self) {
        while let Some(item) = self.items.pop() {
            item.dispose();
        }
    }
}
