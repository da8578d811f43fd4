//! Use cases
//!
//! Each use case borrows the [`ServiceContext`](crate::ServiceContext),
//! validates its payload before touching a repository, and awaits every
//! repository call in order.

mod add_comment;
mod add_thread;
mod delete_comment;
mod get_details_thread;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_details_thread::GetDetailsThreadUseCase;
