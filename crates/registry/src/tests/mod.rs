//! Registry behavior tests over shared fixture types.


mod erased;
