//! Built-in demo passage preloaded into the dashboard's text box.

pub const SAMPLE_TEXT: &str = "\
The harbor was quiet the morning the ferry stopped running, and nobody in town knew what to do with the silence. \
I walked down to the pier anyway. \
Gulls argued over a torn paper bag, the water slapped lazily against the pilings, and the old ticket booth stood empty, its shutters nailed closed. \
It was strange how quickly a place could forget its purpose.
My grandmother used to say that a town is only as alive as its busiest road. \
For forty years that road had been the water. \
Now the tourists were gone, the café had shortened its hours, and the bakery sold bread only on Saturdays. \
I felt sad, but I also felt something stubborn and warm rising underneath the sadness. \
We had survived worse winters. \
We had survived worse news.
By noon the sun broke through, bright and generous, and for a moment the whole bay glittered like it had been polished. \
Children raced along the seawall. \
Someone laughed. \
Maybe the ferry would come back and maybe it would not, but the harbor was still beautiful, and I was glad to be standing in it.
";
