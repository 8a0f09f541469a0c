mod orb;
mod pacto;
mod trail;
mod water;

pub use orb::*;
pub use pacto::*;
pub use trail::*;
pub use water::*;
