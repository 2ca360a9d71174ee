pub mod remove_targeted_publishers;
pub mod create_video_creative;
