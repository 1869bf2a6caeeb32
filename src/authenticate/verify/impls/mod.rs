pub mod verify_fn;
