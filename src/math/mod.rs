pub mod gray;
