//=========================================================================
// Screen Stack
//=========================================================================
//
// Registry and LIFO navigation stack for layered UI screens.
//
// Architecture:
//   ScreenStack
//     ├─ screens: HashMap<K, Slot>   (registry, built once)
//     ├─ stack: Vec<K>               (top = last)
//     ├─ tasks: TaskQueue<K>         (ready callbacks, delayed work)
//     └─ requests: Receiver<NavRequest<K>> (from Navigator handles)
//
// Flow:
//   show() → push → bring-up step 1 ──tick()──► step 2 (ready)
//   hide() → pop → teardown → bring-up of the new top
//
//=========================================================================

//=== Module Declarations =================================================

mod screen_stack;


//=== Public API ==========================================================

pub use screen_stack::{ScreenStack, ScreenStackBuilder};
