mod common;
mod hierarchy;
mod playback;
mod skinning;
