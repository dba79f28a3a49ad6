mod cloning;
mod lookup;
mod rendering;
