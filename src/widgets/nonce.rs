//! Form Nonce Registry
//!
//! Single-use anti-forgery tokens for the create-form widget.

use std::collections::VecDeque;

use uuid::Uuid;

// == Nonce Registry ==
/// Tracks issued, unused nonces.
///
/// Nonces are kept in issue order:
/// - Front = Most recently issued
/// - Back = Oldest, dropped first when the registry is full
#[derive(Debug)]
pub struct NonceRegistry {
    /// Issued nonces by age
    issued: VecDeque<String>,
    /// Maximum outstanding nonces
    capacity: usize,
}

impl NonceRegistry {
    // == Constructor ==
    /// Creates an empty registry holding at most `capacity` nonces.
    pub fn new(capacity: usize) -> Self {
        Self {
            issued: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    // == Issue ==
    /// Issues a fresh nonce, dropping the oldest one when full.
    pub fn issue(&mut self) -> String {
        if self.issued.len() >= self.capacity {
            self.issued.pop_back();
        }
        let nonce = Uuid::new_v4().simple().to_string();
        self.issued.push_front(nonce.clone());
        nonce
    }

    // == Consume ==
    /// Accepts a nonce once. Unknown or already used nonces are refused.
    pub fn consume(&mut self, nonce: &str) -> bool {
        match self.issued.iter().position(|n| n == nonce) {
            Some(index) => {
                self.issued.remove(index);
                true
            }
            None => false,
        }
    }

    // == Length ==
    /// Returns the number of outstanding nonces.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
