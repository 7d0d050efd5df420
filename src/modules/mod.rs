pub mod vision_client;
