pub mod secret_keys;
