/*!
MWC JSON bridge over WebSocket.

Every call answers with an envelope:

```json
{ "success": true, "value": ... }
{ "success": false, "error": { "type": "NotFoundError", "description": "...", "message": "...", "stack": [] } }
```

Over the socket, requests are `{ "id": 1, "method": "getWindowSize", "args": { "app": { "name": "Terminal" } } }`
and the envelope comes back with the same `id`.

AppKit answers display queries fully only on the main thread. A program
serving the bridge from worker threads hands its main thread to a
[`MainThreadLoop`] and passes the paired [`MainThread`] to
[`Bridge::on_main_thread`].
*/

mod control;
mod envelope;
mod main_thread;
mod rpc;
mod server;

pub use control::WindowControl;
pub use envelope::{Envelope, ErrorInfo};
pub use main_thread::{main_thread, MainThread, MainThreadLoop};
pub use rpc::{Bridge, BridgeConfig, Method, RpcResponse};
pub use server::{start_server, ServerConfig, ServerError, DEFAULT_WS_HOST, DEFAULT_WS_PORT};
