mod bound;
mod codec;
mod item;
mod key;
mod map;
mod path;
mod prefix;
mod utils;

pub use {bound::*, codec::*, item::*, key::*, map::*, path::*, prefix::*, utils::*};
