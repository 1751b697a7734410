//! # Domain Services
//!
//! エンティティに属さない純粋なビジネスルール

pub mod factorial;
