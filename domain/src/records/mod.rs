//! Record value objects carried inside successful outcomes

pub mod entities;
