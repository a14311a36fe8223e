mod budget;
mod lambert;
mod porkchop;
