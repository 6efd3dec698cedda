mod dispatch;
mod document;
mod fallback;

#[cfg(all(unix, feature = "external"))]
mod pandoc;
