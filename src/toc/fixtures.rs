//! Sample pages shared by the tests.

pub const SATCHEL_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Satchel - Wikipedia</title></head>
<body>
<div id="content">
<p>A <b>satchel</b> is a bag with a strap. See <a href="/wiki/Bag">bag</a>.</p>
<div id="toc" class="toc">
<div class="toctitle"><h2>Contents</h2></div>
<ul>
<li class="toclevel-1 tocsection-1"><a href="#History"><span class="tocnumber">1</span> <span class="toctext">History</span></a></li>
<li class="toclevel-1 tocsection-2"><a href="#School_bag"><span class="tocnumber">2</span> <span class="toctext">School bag</span></a>
<ul>
<li class="toclevel-2 tocsection-3"><a href="#Cambridge_satchel"><span class="tocnumber">2.1</span> <span class="toctext">Cambridge satchel</span></a></li>
</ul>
</li>
<li class="toclevel-1 tocsection-4"><a href="#Messenger_bag"><span class="tocnumber">3</span> <span class="toctext">Messenger bag</span></a></li>
<li class="toclevel-1 tocsection-5"><a href="#See_also"><span class="tocnumber">4</span> <span class="toctext">See also</span></a></li>
<li class="toclevel-1 tocsection-6"><a href="#References"><span class="tocnumber">5</span> <span class="toctext">References</span></a></li>
</ul>
</div>
<h2 id="History">History</h2>
</div>
</body>
</html>"##;
