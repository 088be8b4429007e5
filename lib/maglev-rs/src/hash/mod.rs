mod hasher;
mod sip;

pub use hasher::{SipBuildHasher, SipHasher};
pub use sip::hash;
